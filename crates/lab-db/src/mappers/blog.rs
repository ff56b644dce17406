//! Blog post entity <-> model mapper

use lab_core::entities::BlogPost;

use crate::models::BlogPostModel;

impl From<BlogPostModel> for BlogPost {
    fn from(model: BlogPostModel) -> Self {
        BlogPost {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            author: model.author,
            cover_image: model.cover_image,
            is_published: model.is_published,
            published_at: model.published_at,
            created_at: model.created_at,
        }
    }
}
