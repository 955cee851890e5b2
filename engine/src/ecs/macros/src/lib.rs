mod component;
mod hashable;

use proc_macro::TokenStream;

#[proc_macro_derive(Component)]
pub fn derive_component(item: TokenStream) -> TokenStream {
    component::derive_component(item)
}

/// Derive `Hashable` for a fieldless enum: each variant hashes to its declaration position and
/// the last variant is `max_hash`.
#[proc_macro_derive(Hashable)]
pub fn derive_hashable(item: TokenStream) -> TokenStream {
    hashable::derive_hashable(item)
}
