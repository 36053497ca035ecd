//! Phone catalog repository.
//!
//! All catalog SQL lives here. Every caller-supplied value is bound as a
//! query parameter, never interpolated into the statement text.

use sqlx::PgPool;

use crate::entities::{PhoneListingEntity, PhoneOfferEntity, PhoneSearchHitEntity};
use shared::pagination::PageParams;

/// Maximum number of rows a search returns.
pub const SEARCH_RESULT_LIMIT: i64 = 15;

/// Repository for read-only phone catalog queries.
#[derive(Clone)]
pub struct PhoneRepository {
    pool: PgPool,
}

impl PhoneRepository {
    /// Creates a new PhoneRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total number of phones in the catalog.
    pub async fn count_phones(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) AS count
            FROM phone
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }

    /// All phones with their cheapest offer, ordered by phone id.
    ///
    /// `DISTINCT ON` keeps exactly one price row per phone; the secondary
    /// sort on `price.price` makes that row the cheapest one, so the
    /// selling-website columns stay consistent with the aggregated price.
    /// With `page` set, a limit/offset window over the same ordering.
    pub async fn list_cheapest(
        &self,
        page: Option<PageParams>,
    ) -> Result<Vec<PhoneListingEntity>, sqlx::Error> {
        match page {
            Some(page) => {
                sqlx::query_as::<_, PhoneListingEntity>(
                    r#"
                    SELECT DISTINCT ON (phone.id)
                           phone.id, image, colour, brand, model, website,
                           price.phone_id, price.price AS minimum_price,
                           price.website_url, storage
                    FROM phone
                    INNER JOIN price ON phone.id = price.phone_id
                    ORDER BY phone.id, price.price ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(page.limit)
                .bind(page.offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PhoneListingEntity>(
                    r#"
                    SELECT DISTINCT ON (phone.id)
                           phone.id, image, colour, brand, model, website,
                           price.phone_id, price.price AS minimum_price,
                           price.website_url, storage
                    FROM phone
                    INNER JOIN price ON phone.id = price.phone_id
                    ORDER BY phone.id, price.price ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    /// Phones whose model, colour, or storage contains `term`, with their
    /// cheapest offer. At most [`SEARCH_RESULT_LIMIT`] rows; an empty term
    /// matches everything.
    ///
    /// Matching is case-sensitive per the database's default collation.
    pub async fn search_cheapest(
        &self,
        term: &str,
    ) -> Result<Vec<PhoneSearchHitEntity>, sqlx::Error> {
        let pattern = format!("%{term}%");
        tracing::debug!(%pattern, "searching catalog");
        sqlx::query_as::<_, PhoneSearchHitEntity>(
            r#"
            SELECT DISTINCT ON (phone.id)
                   phone.id, price.id AS price_id, brand, image, colour,
                   model, website, price.phone_id,
                   price.price AS minimum_price, price.website_url, storage
            FROM phone
            INNER JOIN price ON phone.id = price.phone_id
            WHERE model LIKE $1 OR colour LIKE $1 OR storage LIKE $1
            ORDER BY phone.id, price.price ASC
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(SEARCH_RESULT_LIMIT)
        .fetch_all(&self.pool)
        .await
    }

    /// Every selling-website offer for one phone.
    ///
    /// An unknown id is not an error; it yields an empty vector.
    pub async fn find_offers_by_phone_id(
        &self,
        phone_id: i64,
    ) -> Result<Vec<PhoneOfferEntity>, sqlx::Error> {
        sqlx::query_as::<_, PhoneOfferEntity>(
            r#"
            SELECT brand, model, website, price.price, colour,
                   price.website_url, storage
            FROM phone
            INNER JOIN price ON phone.id = price.phone_id
            WHERE price.phone_id = $1
            "#,
        )
        .bind(phone_id)
        .fetch_all(&self.pool)
        .await
    }
}
