//! The five paginated filter queries over the `person` table.
//!
//! Each operation issues a `COUNT` query and a `SELECT` with `ORDER BY`,
//! `LIMIT`, and `OFFSET` inside one transaction, so the pagination
//! metadata and the returned items observe the same snapshot. The filter
//! predicate is applied to both queries -- the filtered result set is
//! what gets paginated, on every page, not just the first one.
//!
//! The address row is joined eagerly by every query. A person whose
//! address columns come back `NULL` is a data-integrity fault and fails
//! the whole operation with [`DbError::AddressMissing`].

use chrono::NaiveDate;
use matrika_types::{latest_birth_date_for_age, Address, Page, PageRequest, Person};
use sqlx::PgPool;

use crate::error::DbError;
use crate::query::{escape_like, order_by_clause};

/// Shared projection for every listing query.
const SELECT_PERSON: &str = "SELECT p.id, p.first_name, p.last_name, p.birth_date, \
     a.id AS address_id, a.street, a.municipality, a.postal_code \
     FROM person p LEFT JOIN address a ON a.id = p.address_id";

/// Read-only operations on the `person` table.
pub struct PersonStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PersonStore<'a> {
    /// Create a new store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all persons.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if a query fails, or
    /// [`DbError::AddressMissing`] on an integrity fault.
    pub async fn list(&self, req: &PageRequest) -> Result<Page<Person>, DbError> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM person")
            .fetch_one(&mut *tx)
            .await?;

        let sql = format!(
            "{SELECT_PERSON} ORDER BY {} LIMIT $1 OFFSET $2",
            order_by_clause(&req.sort)
        );
        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(total, page = req.page, "Listed persons");
        assemble(rows, total, req)
    }

    /// Persons whose birth year falls within `[year_from, year_to]`,
    /// inclusive on both ends.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if a query fails, or
    /// [`DbError::AddressMissing`] on an integrity fault.
    pub async fn by_birth_year_range(
        &self,
        year_from: i32,
        year_to: i32,
        req: &PageRequest,
    ) -> Result<Page<Person>, DbError> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM person \
             WHERE EXTRACT(YEAR FROM birth_date)::INT BETWEEN $1 AND $2",
        )
        .bind(year_from)
        .bind(year_to)
        .fetch_one(&mut *tx)
        .await?;

        let sql = format!(
            "{SELECT_PERSON} \
             WHERE EXTRACT(YEAR FROM p.birth_date)::INT BETWEEN $1 AND $2 \
             ORDER BY {} LIMIT $3 OFFSET $4",
            order_by_clause(&req.sort)
        );
        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(year_from)
            .bind(year_to)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(total, year_from, year_to, "Filtered by birth-year range");
        assemble(rows, total, req)
    }

    /// Persons whose surname starts with `prefix`, case-insensitively.
    ///
    /// `LIKE` wildcards in the prefix are escaped, so `prefix` is always
    /// matched literally.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if a query fails, or
    /// [`DbError::AddressMissing`] on an integrity fault.
    pub async fn by_surname_prefix(
        &self,
        prefix: &str,
        req: &PageRequest,
    ) -> Result<Page<Person>, DbError> {
        let pattern = format!("{}%", escape_like(prefix));
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar(
            r"SELECT COUNT(*) FROM person WHERE last_name ILIKE $1 ESCAPE '\'",
        )
        .bind(&pattern)
        .fetch_one(&mut *tx)
        .await?;

        let sql = format!(
            r"{SELECT_PERSON} WHERE p.last_name ILIKE $1 ESCAPE '\' ORDER BY {} LIMIT $2 OFFSET $3",
            order_by_clause(&req.sort)
        );
        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(&pattern)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(total, prefix, "Filtered by surname prefix");
        assemble(rows, total, req)
    }

    /// Persons whose address lies in exactly the given municipality.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if a query fails, or
    /// [`DbError::AddressMissing`] on an integrity fault.
    pub async fn by_municipality(
        &self,
        municipality: &str,
        req: &PageRequest,
    ) -> Result<Page<Person>, DbError> {
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM person p \
             JOIN address a ON a.id = p.address_id \
             WHERE a.municipality = $1",
        )
        .bind(municipality)
        .fetch_one(&mut *tx)
        .await?;

        let sql = format!(
            "{SELECT_PERSON} WHERE a.municipality = $1 ORDER BY {} LIMIT $2 OFFSET $3",
            order_by_clause(&req.sort)
        );
        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(municipality)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(total, municipality, "Filtered by municipality");
        assemble(rows, total, req)
    }

    /// Persons who are at least `min_age` whole years old on `today`.
    ///
    /// A person born exactly `min_age` years before `today` is included;
    /// one born a day later is not. The cutoff uses calendar-correct year
    /// subtraction (see
    /// [`latest_birth_date_for_age`]).
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if a query fails, or
    /// [`DbError::AddressMissing`] on an integrity fault.
    pub async fn by_min_age(
        &self,
        min_age: u32,
        today: NaiveDate,
        req: &PageRequest,
    ) -> Result<Page<Person>, DbError> {
        let cutoff = latest_birth_date_for_age(today, min_age);
        let mut tx = self.pool.begin().await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM person WHERE birth_date <= $1")
            .bind(cutoff)
            .fetch_one(&mut *tx)
            .await?;

        let sql = format!(
            "{SELECT_PERSON} WHERE p.birth_date <= $1 ORDER BY {} LIMIT $2 OFFSET $3",
            order_by_clause(&req.sort)
        );
        let rows = sqlx::query_as::<_, PersonRow>(&sql)
            .bind(cutoff)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(total, min_age, %cutoff, "Filtered by minimum age");
        assemble(rows, total, req)
    }
}

/// A joined row from the `person` and `address` tables.
///
/// The address columns are nullable because the join is a `LEFT JOIN`:
/// a missing address row surfaces here as `NULL` columns instead of
/// silently dropping the person, and is turned into
/// [`DbError::AddressMissing`] by [`PersonRow::into_person`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PersonRow {
    /// Person surrogate key.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Surname.
    pub last_name: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Address surrogate key, if the address row resolved.
    pub address_id: Option<i64>,
    /// Street and house number.
    pub street: Option<String>,
    /// Municipality name.
    pub municipality: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

impl PersonRow {
    /// Convert the row into a domain [`Person`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::AddressMissing`] if the address columns are
    /// `NULL`.
    pub fn into_person(self) -> Result<Person, DbError> {
        let person_id = self.id;
        let missing = || DbError::AddressMissing { person_id };
        let address = Address {
            id: self.address_id.ok_or_else(missing)?,
            street: self.street.ok_or_else(missing)?,
            municipality: self.municipality.ok_or_else(missing)?,
            postal_code: self.postal_code.ok_or_else(missing)?,
        };
        Ok(Person {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            address,
        })
    }
}

/// Turn fetched rows plus a raw count into a [`Page`].
fn assemble(rows: Vec<PersonRow>, total: i64, req: &PageRequest) -> Result<Page<Person>, DbError> {
    let items = rows
        .into_iter()
        .map(PersonRow::into_person)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page {
        items,
        total_count: u64::try_from(total).unwrap_or(0),
        page_index: req.page,
        page_size: req.size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64) -> PersonRow {
        PersonRow {
            id,
            first_name: "Jana".to_owned(),
            last_name: "Nováková".to_owned(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap_or(NaiveDate::MIN),
            address_id: Some(7),
            street: Some("Dlouhá 12".to_owned()),
            municipality: Some("Praha".to_owned()),
            postal_code: Some("110 00".to_owned()),
        }
    }

    #[test]
    fn row_with_address_converts() {
        let person = row(3).into_person();
        assert!(matches!(person, Ok(p) if p.address.municipality == "Praha"));
    }

    #[test]
    fn row_without_address_is_an_integrity_fault() {
        let mut broken = row(3);
        broken.address_id = None;
        broken.street = None;
        broken.municipality = None;
        broken.postal_code = None;
        let result = broken.into_person();
        assert!(matches!(
            result,
            Err(DbError::AddressMissing { person_id: 3 })
        ));
    }

    #[test]
    fn assemble_carries_request_metadata() {
        let req = PageRequest::new(2, 5, Vec::new());
        let page = assemble(vec![row(1), row(2)], 12, &req);
        assert!(
            matches!(page, Ok(p) if p.total_count == 12 && p.page_index == 2 && p.page_size == 5)
        );
    }
}
