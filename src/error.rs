use thiserror::Error;

/// Errors raised while configuring an [EntityStore](crate::entities::EntityStore)
/// or resolving a set of component types against its configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
	#[error("component `{name}` is listed more than once in the store configuration")]
	DuplicateComponent { name: &'static str },

	#[error("a store holds at most {max} component types, got {count}")]
	TooManyComponents { count: usize, max: usize },

	#[error("component `{name}` is not part of the store configuration")]
	UnregisteredComponent { name: &'static str },

	#[error("component `{name}` appears more than once in the query")]
	RepeatedQueryComponent { name: &'static str },
}
