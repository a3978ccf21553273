//! # BUILT-IN VALIDATORS
//!
//! Every built-in except `required` passes on empty input, so fields are
//! optional unless the chain says otherwise.

use super::context::ValidationContext;
use super::predicates;
use crate::errors::FormError;

type Builtin = for<'a> fn(ValidationContext<'a>) -> Result<(), FormError>;

/// Rule names and their validators, as seeded into `Registry::builtin`.
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("required", required),
    ("min", min),
    ("max", max),
    ("range", range),
    ("alpha", alpha),
    ("numeric", numeric),
    ("alphanumeric", alphanumeric),
    ("alphadash", alphadash),
    ("username", username),
    ("float", float),
    ("integer", integer),
    ("email", email),
    ("ipv4", ipv4),
    ("mobile", mobile),
    ("mobile2", mobile2),
    ("tel", tel),
    ("phone", phone),
    ("idcard", idcard),
];

pub fn required(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    if !predicates::is_required(ctx.input) {
        return Err(FormError::invalid(format!("{} must not be empty", ctx.title)));
    }
    Ok(())
}

// ================================================================================================
// BOUNDS - min / max / range
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

pub fn min(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    if ctx.input.is_empty() {
        return Ok(());
    }
    let param = ctx.single_param()?;
    check_bound(ctx, param, Bound::Min)
}

pub fn max(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    if ctx.input.is_empty() {
        return Ok(());
    }
    let param = ctx.single_param()?;
    check_bound(ctx, param, Bound::Max)
}

/// `range:lo,hi` is `min:lo` followed by `max:hi`. `lo <= hi` is not enforced.
/// Unlike `min` and `max`, a wrong parameter count fails even on empty input.
pub fn range(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    let [lo, hi] = ctx.params else {
        return Err(FormError::rule_parameter(
            ctx.rule,
            format!("expects 2 parameters, got {}", ctx.params.len()),
        ));
    };
    check_bound(ctx, lo, Bound::Min)?;
    check_bound(ctx, hi, Bound::Max)
}

/// Integers and floats compare by value, strings by character count.
fn check_bound(ctx: ValidationContext<'_>, param: &str, bound: Bound) -> Result<(), FormError> {
    if ctx.input.is_empty() {
        return Ok(());
    }
    let kind = ctx.kind();
    let bad_param = |e: &dyn std::fmt::Display| {
        FormError::rule_parameter(ctx.rule, format!("invalid bound '{}': {}", param, e))
    };

    if kind.is_integer() {
        let limit: i64 = param.parse().map_err(|e| bad_param(&e))?;
        let value: i64 = ctx
            .input
            .parse()
            .map_err(|_| FormError::invalid(format!("{} must be an integer", ctx.title)))?;
        compare(ctx.title, value, limit, bound, "")
    } else if kind.is_float() {
        let limit: f64 = param.parse().map_err(|e| bad_param(&e))?;
        let value: f64 = ctx
            .input
            .parse()
            .map_err(|_| FormError::invalid(format!("{} must be a float", ctx.title)))?;
        compare(ctx.title, value, limit, bound, "")
    } else if kind.is_string() {
        let limit: usize = param.parse().map_err(|e| bad_param(&e))?;
        let length = ctx.input.chars().count();
        compare(ctx.title, length, limit, bound, "the length of ")
    } else {
        Err(FormError::rule_parameter(
            ctx.rule,
            format!("not supported for {} field {}", kind, ctx.field.name()),
        ))
    }
}

fn compare<T>(title: &str, value: T, limit: T, bound: Bound, prefix: &str) -> Result<(), FormError>
where
    T: PartialOrd + std::fmt::Display,
{
    match bound {
        Bound::Min if value < limit => Err(FormError::invalid(format!(
            "{}{} must not be less than {}",
            prefix, title, limit
        ))),
        Bound::Max if value > limit => Err(FormError::invalid(format!(
            "{}{} must not be greater than {}",
            prefix, title, limit
        ))),
        _ => Ok(()),
    }
}

// ================================================================================================
// CHARACTER CLASSES AND PATTERNS
// ================================================================================================

/// Runs `predicate` on non-empty input and fails with `"<title> <what>"`.
fn pattern(
    ctx: ValidationContext<'_>,
    predicate: fn(&str) -> bool,
    what: &str,
) -> Result<(), FormError> {
    if ctx.input.is_empty() || predicate(ctx.input) {
        return Ok(());
    }
    Err(FormError::invalid(format!("{} {}", ctx.title, what)))
}

pub fn alpha(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_alpha, "may only contain letters")
}

pub fn numeric(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_numeric, "may only contain digits")
}

pub fn alphanumeric(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_alphanumeric, "may only contain letters or digits")
}

pub fn alphadash(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(
        ctx,
        predicates::is_alphadash,
        "may only contain letters, digits or underscores",
    )
}

/// `alphadash`, starting with a letter and not ending with `_`.
pub fn username(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    alphadash(ctx)?;
    let input = ctx.input;
    if input.is_empty() {
        return Ok(());
    }
    if !input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(FormError::invalid(format!(
            "{} must start with a letter",
            ctx.title
        )));
    }
    if input.ends_with('_') {
        return Err(FormError::invalid(format!(
            "{} must not end with '_'",
            ctx.title
        )));
    }
    Ok(())
}

pub fn float(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_float, "must be a float")
}

pub fn integer(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_integer, "must be an integer")
}

pub fn email(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_email, "must be a valid email address")
}

pub fn ipv4(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_ipv4, "must be a valid IPv4 address")
}

pub fn mobile(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_mobile, "must be a valid mobile number")
}

pub fn mobile2(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_mobile2, "must be a valid mobile number")
}

pub fn tel(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_tel, "must be a valid telephone number")
}

pub fn phone(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(
        ctx,
        predicates::is_phone,
        "must be a valid mobile or telephone number",
    )
}

pub fn idcard(ctx: ValidationContext<'_>) -> Result<(), FormError> {
    pattern(ctx, predicates::is_idcard, "must be a valid ID card number")
}

// ================================================================================================
// UNIT TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, FieldKind, FloatWidth, IntWidth};
    use std::collections::HashMap;

    fn run(
        check: Builtin,
        kind: FieldKind,
        rule: &str,
        params: &[&str],
        input: &str,
    ) -> Result<(), FormError> {
        let field = FieldDescriptor::new("field", kind);
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        let source: HashMap<String, String> = HashMap::new();
        check(ValidationContext {
            input,
            title: "Field",
            rule,
            params: &params,
            field: &field,
            value: None,
            source: &source,
        })
    }

    const INT: FieldKind = FieldKind::Int(IntWidth::W32);
    const FLOAT: FieldKind = FieldKind::Float(FloatWidth::F64);

    mod bound_tests {
        use super::*;

        #[test]
        fn test_integer_bounds() {
            assert!(run(min, INT, "min", &["18"], "18").is_ok());
            assert_eq!(
                run(min, INT, "min", &["18"], "17"),
                Err(FormError::invalid("Field must not be less than 18"))
            );
            assert!(run(max, INT, "max", &["60"], "61").is_err());
            assert!(run(max, INT, "max", &["60"], "abc").is_err());
        }

        #[test]
        fn test_float_bounds() {
            assert!(run(min, FLOAT, "min", &["50"], "49.9999").is_err());
            assert!(run(max, FLOAT, "max", &["80"], "80").is_ok());
            assert!(run(max, FLOAT, "max", &["2.5"], "a").is_err());
        }

        #[test]
        fn test_string_bounds_count_characters() {
            assert!(run(min, FieldKind::Str, "min", &["3"], "abc").is_ok());
            assert!(run(min, FieldKind::Str, "min", &["3"], "ab").is_err());
            assert!(run(max, FieldKind::Str, "max", &["2"], "日本").is_ok());
            assert!(run(max, FieldKind::Str, "max", &["2"], "日本語").is_err());
        }

        #[test]
        fn test_bad_bound_is_parameter_error() {
            for kind in [INT, FLOAT, FieldKind::Str] {
                assert!(matches!(
                    run(max, kind, "max", &["a"], "4"),
                    Err(FormError::RuleParameter { .. })
                ));
            }
            assert!(matches!(
                run(max, INT, "max", &["1", "3"], "2"),
                Err(FormError::RuleParameter { .. })
            ));
        }

        #[test]
        fn test_unsupported_kind() {
            assert!(matches!(
                run(max, FieldKind::Bool, "max", &["10"], "2"),
                Err(FormError::RuleParameter { .. })
            ));
        }

        #[test]
        fn test_range_arity_checked_even_when_empty() {
            for params in [&["1"][..], &["1", "5", "7"][..], &[][..]] {
                assert!(matches!(
                    run(range, INT, "range", params, ""),
                    Err(FormError::RuleParameter { .. })
                ));
            }
            assert!(run(range, INT, "range", &["1", "10"], "").is_ok());
        }

        #[test]
        fn test_min_max_arity_ignored_when_empty() {
            assert!(run(max, INT, "max", &["1", "2"], "").is_ok());
            assert!(run(min, FieldKind::Str, "min", &[], "").is_ok());
            assert!(run(min, FieldKind::Str, "min", &[""], "").is_ok());
            assert!(matches!(
                run(min, FieldKind::Str, "min", &[], "abc"),
                Err(FormError::RuleParameter { .. })
            ));
        }

        #[test]
        fn test_range_matches_min_then_max() {
            for input in ["17", "18", "40", "60", "61"] {
                let combined = run(range, INT, "range", &["18", "60"], input);
                let split = run(min, INT, "min", &["18"], input)
                    .and_then(|_| run(max, INT, "max", &["60"], input));
                assert_eq!(combined.is_ok(), split.is_ok(), "input {}", input);
            }
        }

        #[test]
        fn test_range_does_not_enforce_order() {
            assert!(run(range, INT, "range", &["10", "1"], "5").is_err());
            assert!(run(range, INT, "range", &["10", "1"], "").is_ok());
        }
    }

    mod pattern_tests {
        use super::*;

        #[test]
        fn test_required() {
            assert!(run(required, FieldKind::Str, "required", &[], "").is_err());
            assert!(run(required, FieldKind::Str, "required", &[], "x").is_ok());
        }

        #[test]
        fn test_empty_input_passes_everything_but_required() {
            for (name, check) in BUILTINS {
                if *name == "required" || *name == "range" {
                    continue;
                }
                let params: &[&str] = if *name == "min" || *name == "max" { &["1"] } else { &[] };
                assert!(run(*check, INT, name, params, "").is_ok(), "{} rejected empty", name);
            }
        }

        #[test]
        fn test_username() {
            let check = |input| run(username, FieldKind::Str, "username", &[], input);
            assert!(check("_abc").is_err());
            assert!(check("abc_").is_err());
            assert!(check("abc.").is_err());
            assert!(check("1abc").is_err());
            assert!(check("abc_1").is_ok());
        }

        #[test]
        fn test_messages_embed_title() {
            let err = run(email, FieldKind::Str, "email", &[], "foo@bar").unwrap_err();
            assert_eq!(err.to_string(), "Field must be a valid email address");
        }

        #[test]
        fn test_pattern_rules() {
            let ok = |check: Builtin, input| run(check, FieldKind::Str, "r", &[], input).is_ok();
            assert!(ok(alpha, "edison") && !ok(alpha, "1234"));
            assert!(ok(numeric, "23") && !ok(numeric, "abc123"));
            assert!(ok(alphanumeric, "abc123") && !ok(alphanumeric, "efe123_"));
            assert!(ok(alphadash, "abc123_") && !ok(alphadash, "fewef123_."));
            assert!(ok(float, "66.666666") && !ok(float, "abcd"));
            assert!(ok(integer, "20") && !ok(integer, "abc"));
            assert!(ok(ipv4, "127.0.0.1") && !ok(ipv4, "256.256.256.256"));
            assert!(ok(mobile, "13812345678") && !ok(mobile, "91234567890"));
            assert!(ok(mobile2, "16612345678") && !ok(mobile2, "1234"));
            assert!(ok(tel, "07651234567") && !ok(tel, "13423456789"));
            assert!(ok(phone, "13812345678") && !ok(phone, "234323"));
            assert!(ok(idcard, "12345678901234567X") && !ok(idcard, "12345678901234567x"));
        }
    }
}
