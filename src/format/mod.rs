mod labeled;
mod value;

pub use labeled::{LabeledText, format_labeled_texts};
pub use value::{
    MAX_VALUE_LEN, NIL, TRUNCATED_SUFFIX, check_equal_args, format_unequal_values, format_value,
    truncating_format, type_name_of,
};
