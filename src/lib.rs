#![doc = include_str!("../README.md")]

pub(crate) mod buffer;
pub mod vector;

/// Construct an [`ElasticVec`](crate::vector::ElasticVec) from a sequence of elements
#[macro_export]
macro_rules! elastic_vec {
    () => { $crate::vector::ElasticVec::new() };

    ( $($x:expr),+ $(,)? ) => {{
        let mut vec = $crate::vector::ElasticVec::new();
        $(
            vec.push_back($x);
        )*
        vec
    }};
}
