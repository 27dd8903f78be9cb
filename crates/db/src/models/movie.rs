//! Movie row model.

use marquee_core::error::CoreError;
use marquee_core::movie::Movie;
use sqlx::FromRow;

/// A row from the `movies` table, with embedding fields already projected
/// out of `document`.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: String,
    pub title: String,
    pub year: Option<i32>,
    pub document: serde_json::Value,
}

impl TryFrom<MovieRow> for Movie {
    type Error = CoreError;

    /// The `title` and `year` columns replace whatever the document holds.
    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let mut movie = Movie::from_document(Some(&row.id), row.document)?;
        movie.title = row.title;
        movie.year = row.year;
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn columns_override_document_title_and_year() {
        let row = MovieRow {
            id: "m1".into(),
            title: "Heat".into(),
            year: Some(1995),
            document: json!({ "title": "HEAT (director's cut)", "year": "1996è", "rated": "R" }),
        };

        let movie = Movie::try_from(row).unwrap();
        assert_eq!(movie.id, "m1");
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, Some(1995));
        assert_eq!(movie.rated.as_deref(), Some("R"));
    }

    #[test]
    fn null_year_column_serves_no_year() {
        let row = MovieRow {
            id: "m2".into(),
            title: "Undated".into(),
            year: None,
            document: json!({ "title": "Undated", "year": 2001 }),
        };

        assert_eq!(Movie::try_from(row).unwrap().year, None);
    }
}
