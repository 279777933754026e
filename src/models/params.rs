//! Conversion of client supplied create parameters into storable entities.

use uuid::Uuid;

use crate::models::{Project, UtcDateTime};

/// Builds an entity of type `E` from create parameters `P`, a freshly generated id
/// and the creation timestamp.
///
/// Any closure `Fn(Uuid, P, &Project, UtcDateTime) -> E` is a `ParamsFactory`.
pub trait ParamsFactory<P, E> {
	fn from_create_params(&self, id: Uuid, params: P, project: &Project, created_at: UtcDateTime)
		-> E;
}

impl<P, E, F> ParamsFactory<P, E> for F
where
	F: Fn(Uuid, P, &Project, UtcDateTime) -> E,
{
	fn from_create_params(
		&self,
		id: Uuid,
		params: P,
		project: &Project,
		created_at: UtcDateTime,
	) -> E {
		self(id, params, project, created_at)
	}
}
