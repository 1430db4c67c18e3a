mod component;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Implements [`Component`](../mask_ecs/components/trait.Component.html) for a plain data type.
///
/// The type must also implement `Default`, which is used to fill the storage slots
/// of entities that never received a value of this type.
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
	let ast = parse_macro_input!(input as DeriveInput);
	component::impl_component(&ast)
}
