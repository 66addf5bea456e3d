//! The config-into-config merge primitive.

use super::{Config, Value};

/// Deep-merges `src` into `dst` in place.
///
/// Keys from `src` override keys in `dst`. When both sides hold a sub-config
/// under the same key the merge recurses; every other value, arrays included,
/// is replaced entirely. Merging a config into itself is a no-op.
pub fn merge_config(dst: &mut Config, src: &Config) {
    if dst.ptr_eq(src) {
        return;
    }
    tracing::debug!(keys = src.len(), "merging config");

    let fields = dst.fields_mut();
    for (key, value) in src {
        match (fields.get_mut(key), value) {
            (Some(Value::Sub(dst_sub)), Value::Sub(src_sub)) => {
                merge_config(dst_sub, src_sub);
            }
            (_, value) => {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(toml_str: &str) -> Config {
        Config::from_toml_str(toml_str).unwrap()
    }

    #[test]
    fn test_merge_overrides_and_recurses() {
        let mut dst = make_config(
            r#"
            name = "base"
            [server]
            host = "localhost"
            port = 80
            "#,
        );
        let src = make_config(
            r#"
            [server]
            port = 8080
            "#,
        );

        merge_config(&mut dst, &src);

        let server = dst.child("server").unwrap();
        assert_eq!(server.get("host"), Some(&Value::from("localhost")));
        assert_eq!(server.get("port"), Some(&Value::Int(8080)));
        assert_eq!(dst.get("name"), Some(&Value::from("base")));
    }

    #[test]
    fn test_merge_into_self_is_noop() {
        let mut dst = make_config("a = 1");
        let same = dst.clone();

        merge_config(&mut dst, &same);

        assert!(dst.ptr_eq(&same));
    }

    #[test]
    fn test_merge_replaces_arrays() {
        let mut dst = make_config("xs = [1, 2, 3]");
        let src = make_config("xs = [9]");

        merge_config(&mut dst, &src);

        assert_eq!(dst.get("xs"), Some(&Value::from(vec![9])));
    }

    #[test]
    fn test_merge_scalar_over_table() {
        let mut dst = make_config("[a]\nb = 1");
        let src = make_config("a = 2");

        merge_config(&mut dst, &src);

        assert_eq!(dst.get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_merge_detaches_shared_destination() {
        let mut dst = make_config("a = 1");
        let marker = dst.clone();

        merge_config(&mut dst, &make_config("b = 2"));

        assert!(!dst.ptr_eq(&marker));
        assert!(!marker.has("b"));
        assert!(dst.has("b"));
    }
}
