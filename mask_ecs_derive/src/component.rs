use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
	let name = &ast.ident;

	// A single lazily allocated id is shared by every instantiation of a generic type,
	// which would make `Foo<u8>` and `Foo<u16>` indistinguishable.
	if !ast.generics.params.is_empty() {
		return syn::Error::new_spanned(&ast.generics, "Component cannot be derived for generic types")
			.to_compile_error()
			.into();
	}

	let name_str = name.to_string().to_uppercase();
	let id_name = format_ident!("__COMPONENT_ID_OF_{}", name_str);

	let gen = quote! {
		mask_ecs::lazy_static! {
			static ref #id_name: mask_ecs::components::ComponentId = unsafe {
				mask_ecs::components::component_id::next_component_id()
			};
		}

		unsafe impl mask_ecs::components::Component for #name {
			#[inline(always)]
			fn component_id() -> mask_ecs::components::ComponentId {
				*#id_name
			}
		}
	};
	gen.into()
}
