//! Code generation for [entity-store](https://docs.rs/entity-store) schemas.

#![deny(unsafe_code, unused_qualifications, trivial_casts)]
#![warn(missing_docs)]
#![deny(clippy::all)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, parse_macro_input, parse_quote, Attribute, Expr, ExprLit, Fields, Ident, ItemStruct, Lit,
    Meta, Type,
};

/// One schema entry: the field naming the kind and the entity type stored under it.
struct Entry {
    field: Ident,
    plural: Ident,
    ty: Type,
}

/// Turns a schema struct into an entity store.
///
/// Every named field `kind: Entity` declares one entity kind. The field's type
/// is rewritten to `Collection<Entity>` and four accessors are generated for it:
///
/// * `get_all_<plural>(&self) -> Vec<Entity>`
/// * `get_<kind>(&self, id: &str) -> StoreResult<Entity>`
/// * `add_<kind>(&self, value: Entity) -> Entity`
/// * `clear_<plural>(&self)`
///
/// The plural is the field name with an `s` appended, unless the field carries
/// `#[plural = "..."]`. The field name and plural must match the entity's
/// `Entity::KIND`; a mismatch fails to compile.
///
/// The struct also gets `new()`, a `Default` impl, a `Store` impl listing the
/// kinds, and a `Holds<Entity>` impl per field, so the generic `StoreEx`
/// methods work on it too. Derives written on the struct are kept.
#[proc_macro_attribute]
pub fn entity_store(args: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemStruct);

    expand(args.into(), item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(args: TokenStream2, mut item: ItemStruct) -> syn::Result<TokenStream2> {
    if !args.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "`entity_store` takes no arguments",
        ));
    }

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "entity stores cannot be generic",
        ));
    }

    let fields = match &mut item.fields {
        Fields::Named(fields) => fields,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "entity stores need named fields, one per entity kind",
            ))
        }
    };

    let mut entries = Vec::with_capacity(fields.named.len());

    for field in fields.named.iter_mut() {
        let Some(name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(&*field, "expected a named field"));
        };

        let plural = take_plural(&name, &mut field.attrs)?;
        let ty = field.ty.clone();

        field.ty = parse_quote! { ::entity_store::Collection<#ty> };
        entries.push(Entry {
            field: name,
            plural,
            ty,
        });
    }

    let ident = &item.ident;
    let names = entries.iter().map(|e| &e.field).collect::<Vec<_>>();
    let types = entries.iter().map(|e| &e.ty).collect::<Vec<_>>();
    let methods = entries.iter().map(accessors);
    let checks = entries.iter().map(kind_check);

    Ok(quote! {
        #item

        impl #ident {
            /// Creates a store with every collection empty.
            pub fn new() -> Self {
                Self {
                    #( #names: ::entity_store::Collection::new(), )*
                }
            }

            #( #methods )*
        }

        impl ::std::default::Default for #ident {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::entity_store::Store for #ident {
            const KINDS: &'static [::entity_store::EntityKind] = &[
                #( <#types as ::entity_store::Entity>::KIND, )*
            ];
        }

        #( #checks )*

        #(
            impl ::entity_store::Holds<#types> for #ident {
                fn collection(&self) -> &::entity_store::Collection<#types> {
                    &self.#names
                }
            }
        )*
    })
}

fn accessors(entry: &Entry) -> TokenStream2 {
    let Entry { field, plural, ty } = entry;

    let get_all = format_ident!("get_all_{}", plural);
    let get = format_ident!("get_{}", field);
    let add = format_ident!("add_{}", field);
    let clear = format_ident!("clear_{}", plural);

    let get_all_doc = format!("Returns every stored `{field}`, in no particular order.");
    let get_doc = format!(
        "Returns the `{field}` stored under `id`, or `StoreError::NotFound` if there is none."
    );
    let add_doc =
        format!("Stores a `{field}` under its id, replacing any previous value, and returns it.");
    let clear_doc = format!("Removes every stored `{field}`. Other kinds are left untouched.");

    quote! {
        #[doc = #get_all_doc]
        pub fn #get_all(&self) -> ::std::vec::Vec<#ty> {
            self.#field.get_all()
        }

        #[doc = #get_doc]
        pub fn #get(&self, id: &str) -> ::entity_store::StoreResult<#ty> {
            self.#field.get(id)
        }

        #[doc = #add_doc]
        pub fn #add(&self, #field: #ty) -> #ty {
            self.#field.add(#field)
        }

        #[doc = #clear_doc]
        pub fn #clear(&self) {
            self.#field.clear()
        }
    }
}

/// A compile-time assertion that the field and its plural spell the entity's kind,
/// so generated method names and `Store::KINDS` never disagree.
fn kind_check(entry: &Entry) -> TokenStream2 {
    let Entry { field, plural, ty } = entry;

    let name = field.unraw().to_string();
    let plural = plural.unraw().to_string();
    let message = format!(
        "field `{name}` with plural `{plural}` does not match the kind of its entity type"
    );

    quote! {
        const _: () = ::std::assert!(
            <#ty as ::entity_store::Entity>::KIND.is_named(#name, #plural),
            #message
        );
    }
}

/// Removes the `#[plural = "..."]` attribute from a field, if present,
/// and returns the plural to use in method names.
fn take_plural(field: &Ident, attrs: &mut Vec<Attribute>) -> syn::Result<Ident> {
    let Some(pos) = attrs.iter().position(|attr| attr.path().is_ident("plural")) else {
        return Ok(format_ident!("{}s", field));
    };

    let attr = attrs.remove(pos);

    match &attr.meta {
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(plural),
                ..
            }) => plural.parse::<Ident>(),
            other => Err(syn::Error::new_spanned(other, "expected a string literal")),
        },
        other => Err(syn::Error::new_spanned(
            other,
            r#"expected `#[plural = "..."]`"#,
        )),
    }
}
