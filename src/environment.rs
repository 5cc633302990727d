use std::collections::HashMap;

use crate::value::Value;

/// A lexical scope. The enclosing scope is borrowed, so it necessarily
/// outlives every scope nested inside it; bindings are only ever written
/// to the innermost scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment<'outer> {
    enclosing: Option<&'outer Environment<'outer>>,
    values: HashMap<String, Value>,
}

impl <'outer> Environment<'outer> {
    pub fn new(enclosing: Option<&'outer Environment<'outer>>) -> Self {
        Self { enclosing, values: HashMap::new() }
    }

    pub fn global() -> Self {
        Self::new(None)
    }

    pub fn enclosed(enclosing: &'outer Environment<'outer>) -> Self {
        Self::new(Some(enclosing))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
            .or_else(|| self.enclosing.and_then(|e| e.get(name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn set<S: Into<String>>(&mut self, name: S, value: Value) {
        self.values.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_are_absent() {
        let env = Environment::global();
        assert_eq!(None, env.get("x"));
        assert!(!env.contains("x"));
    }

    #[test]
    fn set_overwrites_in_the_same_scope() {
        let mut env = Environment::global();
        env.set("x", Value::from(1));
        env.set("x", Value::from(2));
        assert_eq!(Some(&Value::from(2)), env.get("x"));
    }

    #[test]
    fn lookup_walks_outward() {
        let mut global = Environment::global();
        global.set("x", Value::from(1));

        let mut inner = Environment::enclosed(&global);
        inner.set("y", Value::from(2));

        assert_eq!(Some(&Value::from(1)), inner.get("x"));
        assert_eq!(Some(&Value::from(2)), inner.get("y"));
        assert!(!global.contains("y"));
    }

    #[test]
    fn inner_bindings_shadow_outer_ones() {
        let mut global = Environment::global();
        global.set("x", Value::from(1));

        let mut inner = Environment::enclosed(&global);
        inner.set("x", Value::from(10));

        assert_eq!(Some(&Value::from(10)), inner.get("x"));
        assert_eq!(Some(&Value::from(1)), global.get("x"));
    }

    #[test]
    fn scopes_nest_more_than_one_level() {
        let mut global = Environment::global();
        global.set("a", Value::from(1));
        let middle = Environment::enclosed(&global);
        let inner = Environment::new(Some(&middle));
        assert_eq!(Some(&Value::from(1)), inner.get("a"));
    }
}
