//! Expansion of `#[derive(Lenses)]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Expands the derive input into an inherent impl holding the lens functions.
pub fn expand(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => generate_impl(input, named),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "Lenses cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => {
            syn::Error::new_spanned(name, "Lenses can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Lenses cannot be derived for unions.").to_compile_error()
        }
    }
}

fn generate_impl(input: &DeriveInput, fields: &FieldsNamed) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let methods = fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let method_name = format_ident!("{}_lens", field_name);
        let doc = format!("Returns a lens focusing on the `{field_name}` field.");

        Some(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::lenskit::optics::Lens<Self, Self, #field_type, #field_type> + Clone
            where
                #field_type: Clone,
            {
                ::lenskit::optics::KeyPathLens::new(
                    |source: &Self| &source.#field_name,
                    |source: &mut Self| &mut source.#field_name,
                )
            }
        })
    });

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn expand_to_string(input: &DeriveInput) -> String {
        expand(input).to_string()
    }

    #[test]
    fn test_named_struct_generates_one_method_per_field() {
        let input: DeriveInput = parse_quote! {
            struct Point { x: i32, y: i32 }
        };
        let output = expand_to_string(&input);

        assert!(output.contains("fn x_lens"));
        assert!(output.contains("fn y_lens"));
        assert!(output.contains(":: lenskit :: optics :: KeyPathLens :: new"));
    }

    #[test]
    fn test_generic_struct_keeps_generics() {
        let input: DeriveInput = parse_quote! {
            struct Labeled<T: Default> { label: String, value: T }
        };
        let output = expand_to_string(&input);

        assert!(output.contains("impl < T : Default > Labeled < T >"));
        assert!(output.contains("fn value_lens"));
    }

    #[rstest]
    #[case::tuple_struct(parse_quote! { struct Pair(i32, i32); }, "tuple structs")]
    #[case::unit_struct(parse_quote! { struct Marker; }, "unit structs")]
    #[case::enumeration(parse_quote! { enum Shape { Circle(f64) } }, "not enums")]
    #[case::union(parse_quote! { union Bits { int: u32, float: f32 } }, "unions")]
    fn test_unsupported_shapes_report_errors(#[case] input: DeriveInput, #[case] message: &str) {
        let output = expand_to_string(&input);

        assert!(output.contains("compile_error"));
        assert!(output.contains(message));
    }
}
