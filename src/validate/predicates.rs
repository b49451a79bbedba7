//! Small pure predicates shared by the rule catalog.

use std::sync::LazyLock;

use regex::Regex;

use super::attributes::extension_attribute;
use crate::model::Process;

/// XML NCName: a Name without colons.
static NCNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Nd}\p{Mn}\p{Mc}\p{Pc}\x{B7}.-]*$")
        .expect("NCName pattern is a valid regex")
});

/// True for a missing, empty or whitespace-only string.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.chars().all(char::is_whitespace))
}

pub fn contains_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

pub fn is_ncname(value: &str) -> bool {
    NCNAME_RE.is_match(value)
}

/// A process is ad-hoc when its `adHoc` attribute reads `true` (any case,
/// surrounding whitespace ignored). No process context means not ad-hoc.
pub fn is_ad_hoc(process: Option<&Process>) -> bool {
    process
        .and_then(|p| extension_attribute(&p.attributes, "adHoc"))
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
