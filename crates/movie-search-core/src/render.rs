//! HTML fragments for search results

use maud::{Markup, PreEscaped, html};

use crate::types::Movie;

/// How movie titles are written into result fragments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HtmlMode {
    /// Insert titles verbatim. Markup inside a title becomes live markup.
    #[default]
    Raw,
    /// Escape titles as HTML text.
    Escaped,
}

/// Formats a vote average in shortest round-trip form (`7.8`, `8`, `6.25`)
///
/// Negative zero prints as `0`. Magnitudes of 1e21 and above print in full
/// positional notation rather than exponent form.
pub fn format_rating(vote_average: f64) -> String {
    if vote_average == 0.0 {
        return "0".to_string();
    }
    vote_average.to_string()
}

fn movie_markup(movie: &Movie, mode: HtmlMode) -> Markup {
    html! {
        div.movie {
            h3 {
                @match mode {
                    HtmlMode::Raw => { (PreEscaped(&movie.title)) }
                    HtmlMode::Escaped => { (movie.title) }
                }
            }
            p { "Rating: " (format_rating(movie.vote_average)) }
        }
    }
}

/// Renders the fragment for a single movie
///
/// # Example
/// ```
/// use movie_search_core::{Movie, render::{render_movie, HtmlMode}};
/// let movie = Movie { title: "Batman".to_string(), vote_average: 7.8 };
/// assert_eq!(
///     render_movie(&movie, HtmlMode::Raw),
///     r#"<div class="movie"><h3>Batman</h3><p>Rating: 7.8</p></div>"#
/// );
/// ```
pub fn render_movie(movie: &Movie, mode: HtmlMode) -> String {
    movie_markup(movie, mode).into_string()
}

/// Renders one fragment per movie, in order
///
/// An empty slice renders the empty string.
pub fn render_results(movies: &[Movie], mode: HtmlMode) -> String {
    html! {
        @for movie in movies {
            (movie_markup(movie, mode))
        }
    }
    .into_string()
}
