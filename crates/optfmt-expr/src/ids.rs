macro_rules! define_index_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Get the raw index value.
            pub fn value(self) -> u32 {
                self.0
            }

            /// Create an index from a raw value.
            pub fn new(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_index_type!(VariableIndex);
define_index_type!(ConstraintIndex);

#[cfg(test)]
mod tests {
    use super::{ConstraintIndex, VariableIndex};

    #[test]
    fn variable_index_exposes_value() {
        let index = VariableIndex::new(7);
        assert_eq!(index.value(), 7);
    }

    #[test]
    fn constraint_index_display_names_type() {
        let index = ConstraintIndex::new(11);
        assert_eq!(index.to_string(), "ConstraintIndex(11)");
    }

    #[test]
    fn indices_order_by_value() {
        assert!(VariableIndex::new(1) < VariableIndex::new(2));
    }
}
