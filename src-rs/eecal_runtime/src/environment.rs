use eecal_quantity::Quantity;
use indexmap::IndexMap;

/// The variables assigned during a session, in assignment order
///
/// Reassigning a variable keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: IndexMap<String, Quantity>,
}

impl Environment {
    /// Creates an empty environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.variables.get(name)
    }

    /// Assigns a variable, returning its previous value
    pub fn assign(&mut self, name: impl Into<String>, value: Quantity) -> Option<Quantity> {
        self.variables.insert(name.into(), value)
    }

    /// Returns `true` if the variable has been assigned
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates over the variables in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The variable names in assignment order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// The number of variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use eecal_quantity::Kind;

    use super::*;

    fn voltage(mean: f64) -> Quantity {
        Quantity::new(Kind::Voltage, mean, 0.0).expect("valid voltage")
    }

    #[test]
    fn reassignment_keeps_position() {
        let mut environment = Environment::new();
        assert!(environment.assign("a", voltage(1.0)).is_none());
        assert!(environment.assign("b", voltage(2.0)).is_none());

        let previous = environment.assign("a", voltage(3.0));
        assert_eq!(previous, Some(voltage(1.0)));

        let names: Vec<_> = environment.names().collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(environment.get("a"), Some(&voltage(3.0)));
        assert_eq!(environment.len(), 2);
    }

    #[test]
    fn unknown_variable() {
        let environment = Environment::new();
        assert!(environment.get("r1").is_none());
        assert!(!environment.contains("r1"));
        assert!(environment.is_empty());
    }
}
