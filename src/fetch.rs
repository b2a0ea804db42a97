//! Fetches seasonal readings from the UVM Mount Mansfield summit station.
//!
//! The feed is a plotting endpoint that, with `csv=1`, returns a page whose
//! `<pre>` block holds CSV with `Date` and `Depth` columns. The block also
//! carries a season-name banner row and blank trailing rows, which are
//! dropped here.

use crate::error::FetchError;
use crate::reading::Reading;

/// Fetches the readings for the season starting in `year`, ordered
/// chronologically. May be empty early in a season.
pub async fn fetch_season_readings(year: i32) -> Result<Vec<Reading>, FetchError> {
    let response = reqwest::get(season_url(year)).await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    parse_body(&body)
}

/// Feed URL for the season starting in the given calendar year.
pub fn season_url(year: i32) -> String {
    format!(
        "http://waw.w3.uvm.edu/empactdata/gendateplot.php?\
         table=SummitStation&title=Mount+Mansfield+Summit+Station&\
         xskip=7&xparam=Date&yparam=Depth&year%5B%5D={}&csv=1&totals=0",
        year
    )
}

/// Parses the response body: extracts the `<pre>` block and reads its CSV
/// rows, keeping only date-keyed data rows.
pub fn parse_body(body: &str) -> Result<Vec<Reading>, FetchError> {
    let data = extract_pre_block(body)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());

    let mut readings = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.len() < 2 {
            continue;
        }
        if let Some(reading) = Reading::from_row(&row[0], &row[1]) {
            readings.push(reading);
        }
    }

    Ok(readings)
}

fn extract_pre_block(body: &str) -> Result<&str, FetchError> {
    let start = body.find("<pre>").ok_or(FetchError::MissingPreBlock)?;
    let rest = &body[start + "<pre>".len()..];
    let end = rest.find("</pre>").unwrap_or(rest.len());

    Ok(&rest[..end])
}

// -- Tests -------------------------------------------------------------------
