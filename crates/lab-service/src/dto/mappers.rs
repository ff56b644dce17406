//! Entity to DTO mappers
//!
//! `From<&Entity>` conversions for every response type.

use lab_core::entities::{BlogPost, Booking, Location, Package, Report, User};

use super::responses::{
    BlogPostResponse, BlogPostSummaryResponse, BookingResponse, LocationResponse,
    PackageResponse, ReportResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            last_login: user.last_login,
            created_at: user.created_at,
        }
    }
}

impl From<&Package> for PackageResponse {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id,
            name: package.name.clone(),
            slug: package.slug.clone(),
            description: package.description.clone(),
            price: package.price,
            original_price: package.original_price,
            discount_percent: package.discount_percent(),
            parameter_count: package.parameter_count,
            category: package.category.clone(),
            duration: package.duration.clone(),
            sample_type: package.sample_type.clone(),
            is_featured: package.is_featured,
            popularity_score: package.popularity_score,
        }
    }
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            package_id: booking.package_id,
            patient_name: booking.patient_name.clone(),
            email: booking.email.clone(),
            phone: booking.phone.clone(),
            address: booking.address.clone(),
            preferred_date: booking.preferred_date,
            preferred_time: booking.preferred_time.clone(),
            collection_type: booking.collection_type,
            status: booking.status,
            notes: booking.notes.clone(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

impl From<&Report> for ReportResponse {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            booking_id: report.booking_id,
            title: report.title.clone(),
            status: report.status,
            report_date: report.report_date,
            file_url: report.file_url.clone(),
            downloadable: report.is_downloadable(),
            created_at: report.created_at,
        }
    }
}

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            name: location.name.clone(),
            city: location.city.clone(),
            address: location.address.clone(),
            phone: location.phone.clone(),
            map_link: location.map_link.clone(),
            opening_hours: location.opening_hours.clone(),
            connectivity: location.connectivity.clone(),
            connectivity_types: location
                .connectivity_kinds()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl From<&BlogPost> for BlogPostSummaryResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            cover_image: post.cover_image.clone(),
            published_at: post.published_at,
        }
    }
}

impl From<&BlogPost> for BlogPostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            cover_image: post.cover_image.clone(),
            published_at: post.published_at,
        }
    }
}
