//! SQL assembly for the property search.

use core::fmt;

use rust_decimal::Decimal;
use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;

use super::filter::PropertyFilter;

const SELECT: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating\n\
                      FROM properties\n\
                      JOIN property_reviews ON properties.id = property_reviews.property_id";
const GROUP_BY: &str = "GROUP BY properties.id";
const ORDER_BY: &str = "ORDER BY cost_per_night";

/// Marks where a parameter goes in a predicate template.
const PLACEHOLDER: char = '?';

/// A positional parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    /// Bound as `TEXT`.
    Text(String),
    /// Bound as `INT4`.
    Int(i32),
    /// Bound as `INT8`.
    BigInt(i64),
    /// Bound as `NUMERIC`.
    Numeric(Decimal),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Int(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::Numeric(d) => write!(f, "{d}"),
        }
    }
}

/// One condition: a template with a `?` per parameter, and those parameters.
#[derive(Debug)]
struct Predicate {
    template: &'static str,
    params: Vec<SqlParam>,
}

impl Predicate {
    fn new(template: &'static str, params: Vec<SqlParam>) -> Self {
        debug_assert_eq!(
            template.matches(PLACEHOLDER).count(),
            params.len(),
            "placeholder count must match parameter count"
        );
        Self { template, params }
    }
}

/// Accumulates rendered SQL and parameters, numbering placeholders in the
/// order they are emitted.
#[derive(Debug, Default)]
struct Renderer {
    sql: Vec<String>,
    params: Vec<SqlParam>,
}

impl Renderer {
    fn line(&mut self, sql: &str) {
        self.sql.push(sql.to_owned());
    }

    /// Emit `keyword p1 AND p2 ...`, or nothing when `predicates` is empty.
    fn clause(&mut self, keyword: &str, predicates: Vec<Predicate>) {
        if predicates.is_empty() {
            return;
        }

        let mut rendered = Vec::with_capacity(predicates.len());
        for predicate in predicates {
            rendered.push(self.number(predicate.template, predicate.params));
        }
        self.sql.push(format!("{keyword} {}", rendered.join(" AND ")));
    }

    /// Replace each placeholder with the next `$n` and record its parameter.
    fn number(&mut self, template: &str, params: Vec<SqlParam>) -> String {
        let mut params = params.into_iter();
        let mut out = String::with_capacity(template.len() + 4);
        for c in template.chars() {
            if c == PLACEHOLDER {
                if let Some(param) = params.next() {
                    self.params.push(param);
                }
                out.push('$');
                out.push_str(&self.params.len().to_string());
            } else {
                out.push(c);
            }
        }
        out
    }

    fn finish(self) -> SearchQuery {
        SearchQuery {
            sql: self.sql.join("\n"),
            params: self.params,
        }
    }
}

/// A property search ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    sql: String,
    params: Vec<SqlParam>,
}

impl SearchQuery {
    /// Build the search for `filter`, returning at most `limit` listings
    /// ordered by ascending nightly cost.
    ///
    /// Row-level criteria (city, owner, price range) go into `WHERE`; the
    /// rating criterion applies to the aggregate and goes into `HAVING`. The
    /// limit is always the last parameter.
    #[must_use]
    pub fn build(filter: &PropertyFilter, limit: u32) -> Self {
        let mut row_predicates = Vec::new();
        let mut group_predicates = Vec::new();

        if let Some(city) = filter.city() {
            row_predicates.push(Predicate::new(
                "city LIKE ?",
                vec![SqlParam::Text(format!("%{city}%"))],
            ));
        }

        if let Some(owner_id) = filter.owner_id {
            row_predicates.push(Predicate::new(
                "owner_id = ?",
                vec![SqlParam::Int(owner_id.as_i32())],
            ));
        }

        if let Some((min, max)) = filter.price_range() {
            row_predicates.push(Predicate::new(
                "cost_per_night BETWEEN ? AND ?",
                vec![SqlParam::Int(min.cents()), SqlParam::Int(max.cents())],
            ));
        }

        if let Some(rating) = filter.minimum_rating {
            group_predicates.push(Predicate::new(
                "avg(property_reviews.rating) >= ?",
                vec![SqlParam::Numeric(rating)],
            ));
        }

        let mut renderer = Renderer::default();
        renderer.line(SELECT);
        renderer.clause("WHERE", row_predicates);
        renderer.line(GROUP_BY);
        renderer.clause("HAVING", group_predicates);
        renderer.line(ORDER_BY);
        let limit = Predicate::new("?", vec![SqlParam::BigInt(i64::from(limit))]);
        renderer.clause("LIMIT", vec![limit]);
        renderer.finish()
    }

    /// The SQL text with `$n` placeholders.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// Split into the SQL text and its parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }
}

/// Bind `params` to `query` in order.
pub(crate) fn bind_params<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    params: Vec<SqlParam>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    params.into_iter().fold(query, |query, param| match param {
        SqlParam::Text(value) => query.bind(value),
        SqlParam::Int(value) => query.bind(value),
        SqlParam::BigInt(value) => query.bind(value),
        SqlParam::Numeric(value) => query.bind(value),
    })
}
