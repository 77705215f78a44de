use crate::common::Int;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// Variable bindings visible to an evaluation. Names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    variables: HashMap<String, Int>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: Int) -> Self {
        self.set(name, value);
        self
    }

    /// Binds `name`, returning its previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Int) -> Option<Int> {
        self.variables.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<Int> {
        self.variables.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<Int> {
        self.variables.remove(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Int)> + '_ {
        self.variables.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, Int)> for Context {
    fn from_iter<T: IntoIterator<Item = (K, Int)>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

impl<K: Into<String>> Extend<(K, Int)> for Context {
    fn extend<T: IntoIterator<Item = (K, Int)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BindingError {
    #[error("expected `name=value`, found {0:?}")]
    MissingEquals(String),
    #[error("{0:?} is not a valid variable name")]
    InvalidName(String),
    #[error("{0:?} is not a valid integer")]
    InvalidValue(String),
}

/// A single `name=value` pair, as written on a command line.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Int,
}

impl FromStr for Binding {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| BindingError::MissingEquals(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(BindingError::InvalidName(name.to_string()));
        }
        let value = value.trim();
        let value = value
            .parse()
            .map_err(|_| BindingError::InvalidValue(value.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

impl FromIterator<Binding> for Context {
    fn from_iter<T: IntoIterator<Item = Binding>>(iter: T) -> Self {
        iter.into_iter().map(|b| (b.name, b.value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_bindings() {
        let mut ctx = Context::new().with("juice", 4);
        assert_eq!(ctx.get("juice"), Some(4));
        assert_eq!(ctx.get("Juice"), None);
        assert_eq!(ctx.set("juice", 5), Some(4));
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.remove("juice"), Some(5));
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_context_collect() {
        let ctx: Context = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("a"), Some(3));

        let mut pairs: Vec<_> = ctx.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a", 3), ("b", 2)]);
    }

    #[test]
    fn test_parse_binding() {
        assert_eq!(
            "juice=4".parse::<Binding>(),
            Ok(Binding {
                name: "juice".to_string(),
                value: 4
            })
        );
        assert_eq!(
            " str = -1 ".parse::<Binding>().map(|b| b.value),
            Ok(-1)
        );
        assert_eq!(
            "juice".parse::<Binding>(),
            Err(BindingError::MissingEquals("juice".to_string()))
        );
        assert_eq!(
            "x1=2".parse::<Binding>(),
            Err(BindingError::InvalidName("x1".to_string()))
        );
        assert_eq!(
            "x=two".parse::<Binding>(),
            Err(BindingError::InvalidValue("two".to_string()))
        );

        let ctx: Context = ["a=1", "b=2"]
            .iter()
            .map(|s| s.parse::<Binding>().unwrap())
            .collect();
        assert_eq!(ctx.get("b"), Some(2));
    }
}
