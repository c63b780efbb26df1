use itertools::izip;

use super::common::{Meta, Tags, ensure_len, undelta};
use crate::error::FormatError;
use crate::osm::model;
use crate::osm::model::relation::MemberType;
use crate::osm::primitive::PrimitiveScope;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub kind: MemberType,
    pub role: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Relation {
    pub id: i64,
    pub tags: Tags,
    pub members: Vec<Member>,
    pub meta: Option<Meta>,
}

impl Relation {
    pub fn from_raw(relation: &model::Relation, scope: &PrimitiveScope) -> Result<Self, FormatError> {
        let count = relation.memids.len();
        ensure_len("roles_sid", count, relation.roles_sid.len())?;
        ensure_len("types", count, relation.types.len())?;

        let memids = undelta("memids", &relation.memids)?;
        let members = izip!(&relation.roles_sid, memids, &relation.types)
            .map(|(&role, id, &kind)| -> Result<Member, FormatError> {
                Ok(Member {
                    id,
                    kind: MemberType::try_from(kind)
                        .map_err(|_| FormatError::UnknownMemberType(kind))?,
                    role: scope.strings.get(i64::from(role)).map(str::to_owned),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: relation.id,
            tags: Tags::from_parallel(&relation.keys, &relation.vals, &scope.strings)?,
            members,
            meta: Meta::resolve(relation.info.as_ref(), scope)?,
        })
    }
}
