mod component;

use proc_macro::TokenStream;

/// Implements `dense_ecs::components::Component` for a struct or enum.
///
/// The type must also implement `Default`, `Send` and `Sync`; the default value
/// fills container slots of entities that never set the component.
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let ast = match syn::parse(input) {
        Ok(ast) => ast,
        Err(err) => return err.to_compile_error().into(),
    };
    component::impl_component(&ast)
}
