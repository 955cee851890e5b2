use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, parse_macro_input};

pub fn derive_hashable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    match expand(&ast) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(ast: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &ast.ident;

    let Data::Enum(data) = &ast.data else {
        return Err(Error::new(
            Span::call_site(),
            "#[derive(Hashable)] only supports fieldless enums; implement Hashable by hand",
        ));
    };

    if let Some(variant) = data.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(Error::new_spanned(
            variant,
            "#[derive(Hashable)] variants must not carry fields",
        ));
    }

    let Some(last) = data.variants.last() else {
        return Err(Error::new_spanned(
            name,
            "#[derive(Hashable)] needs at least one variant",
        ));
    };
    let last = &last.ident;

    let arms = data.variants.iter().enumerate().map(|(position, variant)| {
        let ident = &variant.ident;
        quote! { #name::#ident => #position }
    });

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::rusty_spatial::ecs::Hashable for #name #ty_generics #where_clause {
            #[inline]
            fn max_hash() -> Self {
                #name::#last
            }

            #[inline]
            fn hash(&self) -> usize {
                match self {
                    #(#arms,)*
                }
            }
        }
    })
}
