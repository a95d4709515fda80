/// Re-exports each listed crate as a module and glob-wise at once, so that
/// the category crates show the leaf crates' items with inlined docs.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
