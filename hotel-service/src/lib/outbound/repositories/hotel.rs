use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use db::Pagination;
use sqlx::PgPool;
use sqlx::Postgres;
use sqlx::QueryBuilder;

use crate::hotel::errors::HotelError;
use crate::hotel::models::Hotel;
use crate::hotel::models::HotelCode;
use crate::hotel::models::HotelImage;
use crate::hotel::models::NewHotel;
use crate::hotel::models::NewReview;
use crate::hotel::models::PropertyType;
use crate::hotel::models::Review;
use crate::hotel::models::ReviewStats;
use crate::hotel::ports::HotelRepository;
use crate::hotel::search::Facet;
use crate::hotel::search::SearchCriteria;
use crate::hotel::search::SearchFacets;
use crate::hotel::search::SortOrder;
use crate::hotel::search::STAR_TOLERANCE;

const HOTEL_COLUMNS: &str =
    "h.id, h.hotel_code, h.title, h.subtitle, h.city, h.price, h.ratings, h.property_type, h.max_guests";

const REVIEW_COLUMNS: &str = "id, reviewer_name, rating, review, date, verified, created_at";

pub struct PostgresHotelRepository {
    pool: PgPool,
}

impl PostgresHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach images and benefits to freshly loaded hotel rows.
    async fn with_children(&self, rows: Vec<HotelRow>) -> Result<Vec<Hotel>, HotelError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();

        let mut images: HashMap<i32, Vec<HotelImage>> = HashMap::new();
        let image_rows = sqlx::query_as::<_, ImageRow>(
            "SELECT hotel_id, image_url, accessible_text FROM hotel_images WHERE hotel_id = ANY($1) ORDER BY id",
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool)
        .await?;
        for row in image_rows {
            images.entry(row.hotel_id).or_default().push(HotelImage {
                image_url: row.image_url,
                accessible_text: row.accessible_text,
            });
        }

        let mut benefits: HashMap<i32, Vec<String>> = HashMap::new();
        let benefit_rows: Vec<(i32, String)> = sqlx::query_as(
            "SELECT hotel_id, benefit FROM hotel_benefits WHERE hotel_id = ANY($1) ORDER BY id",
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool)
        .await?;
        for (hotel_id, benefit) in benefit_rows {
            benefits.entry(hotel_id).or_default().push(benefit);
        }

        rows.into_iter()
            .map(|row| {
                let id = row.id;
                let mut hotel = Hotel::try_from(row)?;
                hotel.images = images.remove(&id).unwrap_or_default();
                hotel.benefits = benefits.remove(&id).unwrap_or_default();
                Ok(hotel)
            })
            .collect()
    }

    async fn facet_counts(
        &self,
        criteria: &SearchCriteria,
        facet: Facet,
    ) -> Result<Vec<(String, i64)>, HotelError> {
        let key = match facet {
            Facet::StarRatings => "CAST(FLOOR(h.ratings + 0.5) AS INTEGER)::TEXT",
            Facet::PropertyType => "h.property_type",
            Facet::City => "TRIM(h.city)",
        };

        let mut builder = QueryBuilder::<Postgres>::new("SELECT ");
        builder.push(key).push(", COUNT(*) FROM hotels h WHERE TRUE");
        push_search_filters(&mut builder, criteria, Some(facet));
        if facet == Facet::StarRatings {
            builder.push(" AND h.ratings IS NOT NULL");
        }
        builder.push(" GROUP BY 1");

        Ok(builder
            .build_query_as::<(String, i64)>()
            .fetch_all(&self.pool)
            .await?)
    }
}

/// Append `AND ...` clauses for every filter in `criteria` except the one of
/// `skip`. The builder must already end in a `WHERE` condition.
pub(crate) fn push_search_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    criteria: &SearchCriteria,
    skip: Option<Facet>,
) {
    if skip != Some(Facet::City) {
        if let Some(city) = &criteria.city {
            builder.push(" AND LOWER(TRIM(h.city)) = ").push_bind(city.clone());
        }
    }

    if skip != Some(Facet::StarRatings) && !criteria.star_ratings.is_empty() {
        builder.push(" AND (");
        for (i, rating) in criteria.star_ratings.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder
                .push("ABS(h.ratings - ")
                .push_bind(*rating)
                .push(") <= ")
                .push(STAR_TOLERANCE);
        }
        builder.push(")");
    }

    if skip != Some(Facet::PropertyType) && !criteria.property_types.is_empty() {
        let types: Vec<String> = criteria
            .property_types
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        builder
            .push(" AND h.property_type = ANY(")
            .push_bind(types)
            .push(")");
    }

    if let Some(range) = criteria.price {
        builder
            .push(" AND h.price BETWEEN ")
            .push_bind(range.start)
            .push(" AND ")
            .push_bind(range.end);
    }

    if let Some(guests) = criteria.guests {
        builder
            .push(" AND h.max_guests >= ")
            .push_bind(i32::try_from(guests).unwrap_or(i32::MAX));
    }
}

fn order_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::HotelCode => " ORDER BY h.hotel_code ASC",
        SortOrder::PriceLowToHigh => " ORDER BY h.price ASC, h.hotel_code ASC",
        SortOrder::PriceHighToLow => " ORDER BY h.price DESC, h.hotel_code ASC",
        SortOrder::RatingsHighToLow => " ORDER BY h.ratings DESC NULLS LAST, h.hotel_code ASC",
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i32,
    hotel_code: i32,
    title: String,
    subtitle: Option<String>,
    city: String,
    price: f64,
    ratings: Option<f64>,
    property_type: String,
    max_guests: i32,
}

impl TryFrom<HotelRow> for Hotel {
    type Error = HotelError;

    fn try_from(row: HotelRow) -> Result<Self, Self::Error> {
        let property_type = row
            .property_type
            .parse::<PropertyType>()
            .map_err(|e| HotelError::DatabaseError(e.to_string()))?;

        Ok(Hotel {
            id: row.id,
            code: HotelCode(row.hotel_code),
            title: row.title,
            subtitle: row.subtitle,
            city: row.city,
            price: row.price,
            ratings: row.ratings,
            property_type,
            max_guests: u32::try_from(row.max_guests).unwrap_or_default(),
            images: Vec::new(),
            benefits: Vec::new(),
        })
    }
}

#[derive(sqlx::FromRow)]
struct ImageRow {
    hotel_id: i32,
    image_url: String,
    accessible_text: Option<String>,
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i32,
    reviewer_name: String,
    rating: f64,
    review: String,
    date: Option<String>,
    verified: bool,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            reviewer_name: row.reviewer_name,
            rating: row.rating,
            review: row.review,
            date: row.date,
            verified: row.verified,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewStatsRow {
    total: i64,
    average: f64,
    one: i64,
    two: i64,
    three: i64,
    four: i64,
    five: i64,
}

impl From<ReviewStatsRow> for ReviewStats {
    fn from(row: ReviewStatsRow) -> Self {
        let count = |n: i64| u64::try_from(n).unwrap_or_default();
        ReviewStats {
            total_reviews: count(row.total),
            average_rating: row.average,
            star_counts: [
                count(row.one),
                count(row.two),
                count(row.three),
                count(row.four),
                count(row.five),
            ],
        }
    }
}

#[async_trait]
impl HotelRepository for PostgresHotelRepository {
    async fn search(
        &self,
        criteria: &SearchCriteria,
        pagination: Pagination,
    ) -> Result<(Vec<Hotel>, u64), HotelError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM hotels h WHERE TRUE");
        push_search_filters(&mut count, criteria, None);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new("SELECT ");
        select
            .push(HOTEL_COLUMNS)
            .push(" FROM hotels h WHERE TRUE");
        push_search_filters(&mut select, criteria, None);
        select
            .push(order_clause(criteria.sort))
            .push(" LIMIT ")
            .push_bind(pagination.limit())
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let rows = select
            .build_query_as::<HotelRow>()
            .fetch_all(&self.pool)
            .await?;

        let hotels = self.with_children(rows).await?;
        Ok((hotels, u64::try_from(total).unwrap_or_default()))
    }

    async fn facets(&self, criteria: &SearchCriteria) -> Result<SearchFacets, HotelError> {
        let mut facets = SearchFacets::default();

        for (key, count) in self.facet_counts(criteria, Facet::StarRatings).await? {
            if let Some(star) = key.parse::<f64>().ok().and_then(SearchFacets::star_key) {
                facets
                    .star_ratings
                    .insert(star, u64::try_from(count).unwrap_or_default());
            }
        }
        for (key, count) in self.facet_counts(criteria, Facet::PropertyType).await? {
            facets
                .property_type
                .insert(key, u64::try_from(count).unwrap_or_default());
        }
        for (key, count) in self.facet_counts(criteria, Facet::City).await? {
            facets
                .cities
                .insert(key, u64::try_from(count).unwrap_or_default());
        }

        Ok(facets)
    }

    async fn find_by_code(&self, code: HotelCode) -> Result<Option<Hotel>, HotelError> {
        let sql = format!("SELECT {} FROM hotels h WHERE h.hotel_code = $1", HOTEL_COLUMNS);
        let row = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(code.0)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(self.with_children(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn reviews(
        &self,
        hotel_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<Review>, HotelError> {
        let sql = format!(
            "SELECT {} FROM hotel_reviews WHERE hotel_id = $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
            REVIEW_COLUMNS
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(hotel_id)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn review_stats(&self, hotel_id: i32) -> Result<ReviewStats, HotelError> {
        let row = sqlx::query_as::<_, ReviewStatsRow>(
            r#"
            SELECT
                COUNT(*) AS total,
                COALESCE(AVG(rating), 0)::DOUBLE PRECISION AS average,
                COUNT(*) FILTER (WHERE FLOOR(rating) = 1) AS one,
                COUNT(*) FILTER (WHERE FLOOR(rating) = 2) AS two,
                COUNT(*) FILTER (WHERE FLOOR(rating) = 3) AS three,
                COUNT(*) FILTER (WHERE FLOOR(rating) = 4) AS four,
                COUNT(*) FILTER (WHERE FLOOR(rating) = 5) AS five
            FROM hotel_reviews
            WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn add_review(&self, hotel_id: i32, review: NewReview) -> Result<Review, HotelError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO hotel_reviews (hotel_id, user_id, reviewer_name, rating, review, date, verified)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            REVIEW_COLUMNS
        );
        let row = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(hotel_id)
            .bind(review.user_id)
            .bind(&review.reviewer_name)
            .bind(review.rating)
            .bind(&review.review)
            .bind(&review.date)
            .bind(review.verified)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE hotels SET updated_at = NOW() WHERE id = $1")
            .bind(hotel_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn available_cities(&self) -> Result<Vec<String>, HotelError> {
        Ok(
            sqlx::query_scalar("SELECT DISTINCT city FROM hotels ORDER BY city")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn seed(&self, hotels: Vec<NewHotel>) -> Result<u64, HotelError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for hotel in hotels {
            let id: Option<i32> = sqlx::query_scalar(
                r#"
                INSERT INTO hotels (hotel_code, title, subtitle, city, price, ratings, property_type, max_guests)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT (hotel_code) DO NOTHING
                RETURNING id
                "#,
            )
            .bind(hotel.code.0)
            .bind(&hotel.title)
            .bind(&hotel.subtitle)
            .bind(&hotel.city)
            .bind(hotel.price)
            .bind(hotel.ratings)
            .bind(hotel.property_type.as_str())
            .bind(i32::try_from(hotel.max_guests).unwrap_or(i32::MAX))
            .fetch_optional(&mut *tx)
            .await?;

            let Some(id) = id else {
                tracing::debug!(hotel_code = %hotel.code, "Hotel already present, skipping");
                continue;
            };

            for image in &hotel.images {
                sqlx::query(
                    "INSERT INTO hotel_images (hotel_id, image_url, accessible_text) VALUES ($1, $2, $3)",
                )
                .bind(id)
                .bind(&image.image_url)
                .bind(&image.accessible_text)
                .execute(&mut *tx)
                .await?;
            }

            for benefit in &hotel.benefits {
                sqlx::query("INSERT INTO hotel_benefits (hotel_id, benefit) VALUES ($1, $2)")
                    .bind(id)
                    .bind(benefit)
                    .execute(&mut *tx)
                    .await?;
            }

            for review in &hotel.reviews {
                sqlx::query(
                    r#"
                    INSERT INTO hotel_reviews (hotel_id, user_id, reviewer_name, rating, review, date, verified)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(id)
                .bind(review.user_id)
                .bind(&review.reviewer_name)
                .bind(review.rating)
                .bind(&review.review)
                .bind(&review.date)
                .bind(review.verified)
                .execute(&mut *tx)
                .await?;
            }

            inserted += 1;
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
