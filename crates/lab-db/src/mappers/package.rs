//! Package entity <-> model mapper

use lab_core::entities::Package;

use crate::models::PackageModel;

impl From<PackageModel> for Package {
    fn from(model: PackageModel) -> Self {
        Package {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            price: model.price,
            original_price: model.original_price,
            parameter_count: model.parameter_count,
            category: model.category,
            duration: model.duration,
            sample_type: model.sample_type,
            is_featured: model.is_featured,
            is_active: model.is_active,
            popularity_score: model.popularity_score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
