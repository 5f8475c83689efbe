use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro for fixed-shape records of named `f64` values.
///
/// Every field of the source struct must be `f64`. The derive adds:
/// - `N_FIELDS`: number of fields
/// - `field_names()`: exported names in declaration order
/// - `to_array()` / `from_array()`: conversion to and from `[f64; N_FIELDS]`
///
/// Use `#[flux(name = "Qt1")]` on a field to export it under a different
/// name than the Rust identifier.
#[proc_macro_derive(FluxRecord, attributes(flux))]
pub fn derive_flux_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "FluxRecord can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "FluxRecord can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "FluxRecord struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut exported_names = Vec::new();
    let mut field_idents = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "FluxRecord derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        let exported = match exported_name(field) {
            Ok(Some(renamed)) => renamed,
            Ok(None) => ident.to_string(),
            Err(err) => return err.to_compile_error().into(),
        };
        exported_names.push(exported);
        field_idents.push(ident);
    }

    let n_fields = field_idents.len();
    let indices = 0..n_fields;

    let expanded = quote! {
        impl #name {
            /// Number of values in this record.
            pub const N_FIELDS: usize = #n_fields;

            /// Exported field names, in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#exported_names),*]
            }

            /// Flatten the record into a fixed-size array, in declaration order.
            pub fn to_array(&self) -> [f64; #n_fields] {
                [#(self.#field_idents),*]
            }

            /// Rebuild the record from a fixed-size array, in declaration order.
            pub fn from_array(arr: &[f64; #n_fields]) -> Self {
                Self {
                    #(#field_idents: arr[#indices],)*
                }
            }
        }
    };

    expanded.into()
}

/// Read `#[flux(name = "...")]` from a field, if present.
fn exported_name(field: &syn::Field) -> syn::Result<Option<String>> {
    for attr in &field.attrs {
        if !attr.path().is_ident("flux") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in nested {
            if let Meta::NameValue(nv) = &meta {
                if nv.path.is_ident("name") {
                    if let syn::Expr::Lit(expr_lit) = &nv.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            return Ok(Some(lit_str.value()));
                        }
                    }
                }
            }
            return Err(syn::Error::new_spanned(
                meta,
                "expected `name = \"...\"` in #[flux(...)]",
            ));
        }
    }
    Ok(None)
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
