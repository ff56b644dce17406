//! Location entity <-> model mapper

use lab_core::entities::Location;

use crate::models::LocationModel;

impl From<LocationModel> for Location {
    fn from(model: LocationModel) -> Self {
        Location {
            id: model.id,
            name: model.name,
            city: model.city,
            address: model.address,
            phone: model.phone,
            map_link: model.map_link,
            opening_hours: model.opening_hours,
            connectivity: model.connectivity.0,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
