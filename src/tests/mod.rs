mod entity_filter_tests;
