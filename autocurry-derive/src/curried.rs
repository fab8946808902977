//! Implementation of the `curried!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curried!(|a, b| body)`, arity is the parameter count
//! 2. Function name + arity form: `curried!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! For a closure `|a, b, c| body`, the macro generates:
//!
//! ```text
//! {
//!     let __autocurry_function = |a, b, c| body;
//!     ::autocurry::curry::Curried::from_array(
//!         move |[__autocurry_argument_0, __autocurry_argument_1, __autocurry_argument_2]: [_; 3usize]| {
//!             __autocurry_function(
//!                 __autocurry_argument_0,
//!                 __autocurry_argument_1,
//!                 __autocurry_argument_2,
//!             )
//!         },
//!     )
//! }
//! ```
//!
//! The function name + arity form is identical with the path in place of the
//! closure.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token, spanned::Spanned};

enum CurriedInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

pub fn curried_impl(input: TokenStream) -> TokenStream {
    match parse_curried_input(input) {
        Ok(CurriedInput::Closure(closure)) => {
            generate_from_array(closure.inputs.len(), &quote! { #closure })
        }
        Ok(CurriedInput::FunctionWithArity { function, arity }) => {
            generate_from_array(arity, &quote! { #function })
        }
        Err(error) => error.to_compile_error(),
    }
}

fn parse_curried_input(input: TokenStream) -> syn::Result<CurriedInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions: Punctuated<Expr, Token![,]> = syn::parse::Parser::parse2(parser, input)?;

    let mut expressions = expressions.into_iter();
    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(Expr::Closure(closure)), None, None) => Ok(CurriedInput::Closure(closure)),
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curried! with function name requires arity: curried!(function_name, 2)",
        )),
        (Some(Expr::Path(function)), Some(arity), None) => Ok(CurriedInput::FunctionWithArity {
            function,
            arity: literal_arity(&arity)?,
        }),
        (Some(other), Some(_), None) => Err(syn::Error::new(
            other.span(),
            "expected a function name or path",
        )),
        (first, _, _) => Err(syn::Error::new(
            first.map_or_else(Span::call_site, |expression| expression.span()),
            "curried! requires a closure or function name with arity",
        )),
    }
}

fn literal_arity(expression: &Expr) -> syn::Result<usize> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Int(integer),
        ..
    }) = expression
    {
        integer.base10_parse()
    } else {
        Err(syn::Error::new(
            expression.span(),
            "curried! expected an integer literal for arity",
        ))
    }
}

fn generate_from_array(arity: usize, function_expression: &TokenStream) -> TokenStream {
    let argument_identifiers: Vec<_> = (0..arity)
        .map(|index| format_ident!("__autocurry_argument_{}", index))
        .collect();

    quote! {
        {
            let __autocurry_function = #function_expression;
            ::autocurry::curry::Curried::from_array(
                move |[#(#argument_identifiers),*]: [_; #arity]| {
                    __autocurry_function(#(#argument_identifiers),*)
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand(input: TokenStream) -> String {
        curried_impl(input).to_string()
    }

    fn parse_error(input: TokenStream) -> String {
        match parse_curried_input(input) {
            Ok(_) => String::new(),
            Err(error) => error.to_string(),
        }
    }

    #[rstest]
    fn test_closure_arity_is_parameter_count() {
        let expanded = expand(quote! { |a: i32, b: i32, c: i32| a + b + c });
        assert!(expanded.contains("from_array"));
        assert!(expanded.contains("3usize"));
        assert!(expanded.contains("__autocurry_argument_2"));
        assert!(!expanded.contains("__autocurry_argument_3"));
    }

    #[rstest]
    fn test_zero_parameter_closure() {
        let expanded = expand(quote! { || 42 });
        assert!(expanded.contains("0usize"));
        assert!(!expanded.contains("__autocurry_argument_0"));
    }

    #[rstest]
    fn test_function_with_arity() {
        let expanded = expand(quote! { add, 2 });
        assert!(expanded.contains("let __autocurry_function = add"));
        assert!(expanded.contains("2usize"));
    }

    #[rstest]
    #[case(quote! { add }, "curried! with function name requires arity")]
    #[case(quote! { add, n }, "curried! expected an integer literal for arity")]
    #[case(quote! { 1 + 2, 2 }, "expected a function name or path")]
    #[case(quote! { |x: i32| x, 1 }, "expected a function name or path")]
    #[case(quote! { 42 }, "curried! requires a closure or function name with arity")]
    #[case(quote! { add, 2, 3 }, "curried! requires a closure or function name with arity")]
    #[case(quote! {}, "curried! requires a closure or function name with arity")]
    fn test_invalid_input(#[case] input: TokenStream, #[case] expected: &str) {
        assert!(parse_error(input).starts_with(expected));
    }

    #[rstest]
    fn test_invalid_input_expands_to_compile_error() {
        assert!(expand(quote! { add }).contains("compile_error"));
    }
}
