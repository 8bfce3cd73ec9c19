//! Amount module - the Korean-unit currency codec.

mod amount_codec;

#[cfg(test)]
mod amount_codec_tests;

pub use amount_codec::{
    format_amount, group_thousands, parse_amount, UNIT_CHEONMAN, UNIT_EOK, UNIT_JO, UNIT_MAN,
};
