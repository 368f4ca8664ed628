use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::actors::{ActorEntity, MovieCastEntity, SeriesCastEntity};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateActorModel {
    pub name: String,
    #[serde(default)]
    pub biography: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditActorModel {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActorDto {
    pub id: i64,
    pub name: String,
    pub biography: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

impl From<ActorEntity> for ActorDto {
    fn from(value: ActorEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            biography: value.biography,
            birth_date: value.birth_date,
            nationality: value.nationality,
            photo_url: value.photo_url,
        }
    }
}

/// Request body for linking an actor into a movie or series cast.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkCastModel {
    pub actor_id: i64,
    pub role_name: String,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CastMemberDto {
    pub actor: ActorDto,
    pub role_name: String,
    pub display_order: i32,
}

impl From<(MovieCastEntity, ActorEntity)> for CastMemberDto {
    fn from((link, actor): (MovieCastEntity, ActorEntity)) -> Self {
        Self {
            actor: actor.into(),
            role_name: link.role_name,
            display_order: link.display_order,
        }
    }
}

impl From<(SeriesCastEntity, ActorEntity)> for CastMemberDto {
    fn from((link, actor): (SeriesCastEntity, ActorEntity)) -> Self {
        Self {
            actor: actor.into(),
            role_name: link.role_name,
            display_order: link.display_order,
        }
    }
}
