//! utilbelt
//!
//! A lodash-style helper belt: string predicates, case conversion,
//! generators and generic slice operations. Every helper is a stateless,
//! single-pass function over a string or a small slice.
//!
//! # Features
//!
//! - **Predicates**: integers, floats, booleans, emails, URLs, JSON, IPv4,
//!   hex and RGB colors, credit cards, character classes
//! - **Case conversion**: snake, kebab, camel and Pascal case
//! - **Conversion tiers**: lenient helpers fall back to zero values, strict
//!   helpers return [`Result`]
//! - **Generators**: UUID v4, time-based tokens, random strings and ranges,
//!   with injectable clocks and random generators
//! - **Slices**: one generic implementation per operation
//!
//! # Quick Start
//!
//! ```rust
//! use utilbelt::{is_credit_card, to_snake, to_pascal, filter, index};
//!
//! assert!(is_credit_card("4653 0343 2480 9848"));
//! assert_eq!(to_snake("PascalCase"), "pascal_case");
//! assert_eq!(to_pascal("FOO_bar"), "FOOBar");
//! assert_eq!(filter(&[3, 1, 2], |x| x % 2 == 1), vec![3, 1]);
//! assert_eq!(index(&["foo", "bar"], &"bar"), Some(1));
//! ```

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod generators;
pub mod predicates;
pub mod slices;
pub mod strings;

// Re-exports for convenience
pub use error::{Result, UtilBeltError};

pub use predicates::{
    is_bool, is_credit_card, is_email, is_float, is_hex_color, is_int, is_ip, is_json,
    is_only_alpha, is_only_alpha_digits, is_only_alpha_num, is_only_alpha_numeric,
    is_only_digits, is_only_letters, is_only_letters_numbers, is_only_numbers, is_rgb,
    is_rgb_color, is_url, luhn_valid,
};

pub use strings::{
    decode_base64, from_base64, lc_first, lower_first, parse_int, parse_uint, reverse,
    rstring, to_base64, to_camel, to_camel_case, to_int, to_kebab, to_kebab_case, to_pascal,
    to_pascal_case, to_snake, to_snake_case, to_uint, uc_first, upper_first,
};

pub use generators::{
    rand_range, rand_range_with, rand_str, random_string, str_rand, str_rand_with, try_uuid,
    uniq, uniq_with, unique, uuid, uuid_from, Clock, FixedClock, SystemClock,
};

pub use slices::{
    all, any, contains, delete, eq_slices, every, filter, in_slice, index, index_insensitive,
    indexi, map, random_element, random_element_with, reverse_sort, reverse_sort_floats, rsort,
    some,
};
