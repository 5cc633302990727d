use std::fmt::{self, Display};

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Error(String),
    /// Carries a result out of nested statements; the enclosing program
    /// unwraps it.
    ReturnValue(Box<Value>),
}

impl Value {
    pub fn new_error<S: Into<String>>(message: S) -> Self {
        Value::Error(message.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Error(_) => "ERROR",
            Value::ReturnValue(_) => "RETURN_VALUE",
        }
    }

    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Error(message) => format!("ERROR: {}", message),
            Value::ReturnValue(v) => v.inspect(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}
