//! HTML input attribute serialization
//!
//! Form templates embed field metadata into native `<input>` elements. The
//! helpers here turn ordered `(name, value)` pairs into a single escaped
//! `key="value"` string, skipping pairs that carry no value.

/// Escape a string for embedding inside a double-quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use admin_fields::params::escape_html_attr;
///
/// let escaped = escape_html_attr(r#"5" onload="alert('xss')"#);
/// assert!(escaped.contains("&quot;"));
/// assert!(escaped.contains("&#x27;"));
/// assert!(!escaped.contains('"'));
/// ```
pub fn escape_html_attr(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
		.replace('\n', "&#10;")
		.replace('\r', "&#13;")
}

/// Build a space-joined `key="value"` attribute string from ordered pairs.
///
/// Pairs whose value is `None` or empty are omitted entirely; values are
/// attribute-escaped. Key order follows the input order.
///
/// # Examples
///
/// ```
/// use admin_fields::params::html_params;
///
/// let params = html_params([
/// 	("type", Some("number".to_string())),
/// 	("min", Some("0".to_string())),
/// 	("max", None),
/// ]);
/// assert_eq!(params, r#"type="number" min="0""#);
/// ```
pub fn html_params<'a, I>(pairs: I) -> String
where
	I: IntoIterator<Item = (&'a str, Option<String>)>,
{
	pairs
		.into_iter()
		.filter_map(|(key, value)| match value {
			Some(v) if !v.is_empty() => Some(format!(r#"{}="{}""#, key, escape_html_attr(&v))),
			_ => None,
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_html_params_skips_absent_values() {
		let params = html_params([
			("type", Some("text".to_string())),
			("min", None),
			("max", None),
		]);

		assert_eq!(params, r#"type="text""#);
	}

	#[test]
	fn test_html_params_skips_empty_values() {
		let params = html_params([("type", Some(String::new())), ("step", Some("any".to_string()))]);

		assert_eq!(params, r#"step="any""#);
	}

	#[test]
	fn test_html_params_preserves_pair_order() {
		let params = html_params([
			("type", Some("number".to_string())),
			("min", Some("1".to_string())),
			("max", Some("9".to_string())),
			("step", Some("2".to_string())),
		]);

		assert_eq!(params, r#"type="number" min="1" max="9" step="2""#);
	}

	#[test]
	fn test_html_params_empty_input() {
		let pairs: [(&str, Option<String>); 0] = [];
		assert_eq!(html_params(pairs), "");
	}

	#[rstest]
	#[case("&", "&amp;")]
	#[case("<script>", "&lt;script&gt;")]
	#[case(r#"a"b"#, "a&quot;b")]
	#[case("it's", "it&#x27;s")]
	#[case("line\nbreak", "line&#10;break")]
	fn test_escape_html_attr(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html_attr(input), expected);
	}

	#[test]
	fn test_html_params_escapes_values() {
		// A quote inside a value must not terminate the attribute
		let params = html_params([("pattern", Some(r#"a"b"#.to_string()))]);

		assert_eq!(params, r#"pattern="a&quot;b""#);
	}
}
