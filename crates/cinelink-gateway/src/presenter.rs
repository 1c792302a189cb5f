use cinelink_core::{DetailsPayload, LinkRecord};
use cinelink_redirect::Redirector;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Longest plot shown in a caption, in characters, ellipsis included.
pub const PLOT_LIMIT: usize = 300;

#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct PresenterSettings {
    /// Public origin of this gateway. When set, every rendered link is
    /// exchanged for a redirect token under it.
    #[builder(default, setter(strip_option, into))]
    pub public_base_url: Option<String>,
    /// Streaming hub that plays a URL passed in its `url` query parameter.
    #[builder(default, setter(strip_option, into))]
    pub watch_base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub label: String,
    pub download_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
}

/// Turns normalized details into menu entries a chat client can show.
pub struct LinkPresenter {
    settings: PresenterSettings,
    redirector: Arc<dyn Redirector>,
}

impl LinkPresenter {
    pub fn new(settings: PresenterSettings, redirector: Arc<dyn Redirector>) -> Self {
        Self {
            settings,
            redirector,
        }
    }

    pub fn is_redirecting(&self) -> bool {
        self.settings.public_base_url.is_some()
    }

    /// The URL handed to users for `url`: a fresh redirect link when a public
    /// base URL is configured, otherwise `url` itself.
    pub fn public_link(&self, url: &str) -> String {
        match &self.settings.public_base_url {
            Some(base) => self.redirector.issue(url).to_url(base),
            None => url.to_owned(),
        }
    }

    pub fn watch_link(&self, url: &str) -> Option<String> {
        self.settings.watch_base_url.as_deref().map(|base| {
            format!(
                "{}/?url={}",
                base.trim_end_matches('/'),
                urlencoding::encode(url)
            )
        })
    }

    pub fn label(record: &LinkRecord) -> String {
        if record.has_size() {
            format!("{} ({})", record.quality, record.size)
        } else {
            record.quality.clone()
        }
    }

    /// Menu header: title and link count, then whatever descriptive fields
    /// upstream supplied, with the plot shortened to [`PLOT_LIMIT`].
    pub fn caption(details: &DetailsPayload) -> String {
        let mut lines = vec![match details.link_count() {
            0 => format!("{}: no download links available", details.title()),
            1 => format!("{} (1 link)", details.title()),
            n => format!("{} ({n} links)", details.title()),
        }];

        let info = details.info();
        if let Some(year) = &info.year {
            lines.push(format!("Year: {year}"));
        }
        if let Some(rating) = &info.rating {
            lines.push(format!("Rating: {rating}/10"));
        }
        if let Some(duration) = &info.duration {
            lines.push(format!("Duration: {duration}"));
        }
        if let Some(genre) = &info.genre {
            lines.push(format!("Genre: {genre}"));
        }
        if let Some(plot) = &info.plot {
            lines.push(String::new());
            lines.push(shorten(plot, PLOT_LIMIT));
        }

        lines.join("\n")
    }

    /// Movie-level links first, then each episode's links in episode order.
    pub fn render(&self, details: &DetailsPayload) -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = details
            .download_links()
            .iter()
            .map(|record| self.entry(record, None))
            .collect();

        for episode in details.episodes().unwrap_or_default() {
            let number = episode.episode_number();
            entries.extend(
                episode
                    .download_links()
                    .iter()
                    .map(|record| self.entry(record, Some(number))),
            );
        }

        debug!(
            title = details.title(),
            entries = entries.len(),
            redirecting = self.is_redirecting(),
            "rendered menu"
        );
        entries
    }

    fn entry(&self, record: &LinkRecord, episode: Option<u32>) -> MenuEntry {
        let download_url = self.public_link(&record.url);
        // the hub streams through the same link the user downloads from
        let watch_url = self.watch_link(&download_url);
        let label = match episode {
            Some(number) => format!("E{number:02} {}", Self::label(record)),
            None => Self::label(record),
        };

        MenuEntry {
            label,
            download_url,
            watch_url,
            episode,
        }
    }
}

fn shorten(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let kept: String = text.chars().take(limit.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelink_core::{EpisodeRecord, MediaInfo, Token};
    use cinelink_redirect::{RedirectStore, Resolution, StoreSettings};

    fn store() -> Arc<RedirectStore> {
        Arc::new(RedirectStore::new(StoreSettings::default()).unwrap())
    }

    fn movie() -> DetailsPayload {
        DetailsPayload::new(
            "Heat",
            vec![
                LinkRecord::new("720p", "1.1GB", "https://cdn.example/heat 720.mkv"),
                LinkRecord::new("1080p", "Unknown", "https://cdn.example/heat-1080.mkv"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn pass_through_mode_keeps_urls() {
        let store = store();
        let presenter = LinkPresenter::new(PresenterSettings::default(), store.clone());

        let menu = presenter.render(&movie());

        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].download_url, "https://cdn.example/heat 720.mkv");
        assert_eq!(menu[0].label, "720p (1.1GB)");
        assert_eq!(menu[1].label, "1080p");
        assert_eq!(menu[0].watch_url, None);
        assert!(store.is_empty());
    }

    #[test]
    fn redirect_mode_issues_one_token_per_link() {
        let store = store();
        let settings = PresenterSettings::builder()
            .public_base_url("https://go.example/")
            .build();
        let presenter = LinkPresenter::new(settings, store.clone());

        let menu = presenter.render(&movie());

        assert_eq!(store.len(), 2);
        let token = menu[1]
            .download_url
            .strip_prefix("https://go.example/r/")
            .expect("redirect link under the public base");
        assert_eq!(
            store.resolve(&Token::parse(token).unwrap()),
            Resolution::Found("https://cdn.example/heat-1080.mkv".to_string())
        );
    }

    #[test]
    fn watch_link_percent_encodes_reserved_characters() {
        let settings = PresenterSettings::builder()
            .watch_base_url("https://hub.example/")
            .build();
        let presenter = LinkPresenter::new(settings, store());

        assert_eq!(
            presenter.watch_link("https://cdn.example/a b.mkv?x=1&y=2").as_deref(),
            Some("https://hub.example/?url=https%3A%2F%2Fcdn.example%2Fa%20b.mkv%3Fx%3D1%26y%3D2")
        );
    }

    #[test]
    fn episode_entries_follow_movie_entries() {
        let episodes = vec![
            EpisodeRecord::new(
                2,
                vec![LinkRecord::new("480p", "Unknown", "https://cdn.example/e2.mkv")],
            )
            .unwrap(),
            EpisodeRecord::new(
                10,
                vec![LinkRecord::new("720p", "300MB", "https://cdn.example/e10.mkv")],
            )
            .unwrap(),
        ];
        let details = DetailsPayload::new("Dark", Vec::new(), episodes);
        let presenter = LinkPresenter::new(PresenterSettings::default(), store());

        let menu = presenter.render(&details);

        let labels: Vec<&str> = menu.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["E02 480p", "E10 720p (300MB)"]);
        assert_eq!(menu[1].episode, Some(10));
    }

    #[test]
    fn caption_counts_links() {
        assert_eq!(LinkPresenter::caption(&movie()), "Heat (2 links)");

        let empty = DetailsPayload::new("Heat", Vec::new(), Vec::new());
        assert_eq!(
            LinkPresenter::caption(&empty),
            "Heat: no download links available"
        );
    }

    #[test]
    fn caption_lists_descriptive_fields() {
        let info = MediaInfo {
            year: Some("1995".to_string()),
            rating: Some("8.3".to_string()),
            genre: Some("Crime, Drama".to_string()),
            plot: Some("A heist.".to_string()),
            ..MediaInfo::default()
        };
        let details = movie().with_info(info);

        assert_eq!(
            LinkPresenter::caption(&details),
            "Heat (2 links)\nYear: 1995\nRating: 8.3/10\nGenre: Crime, Drama\n\nA heist."
        );
    }

    #[test]
    fn caption_shortens_long_plots() {
        let plot = "é".repeat(PLOT_LIMIT + 50);
        let details = movie().with_info(MediaInfo {
            plot: Some(plot),
            ..MediaInfo::default()
        });

        let caption = LinkPresenter::caption(&details);
        let shown = caption.rsplit('\n').next().unwrap();
        assert_eq!(shown.chars().count(), PLOT_LIMIT);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn menu_entry_json_shape() {
        let entry = MenuEntry {
            label: "720p".to_string(),
            download_url: "https://cdn.example/a.mkv".to_string(),
            watch_url: None,
            episode: Some(3),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["downloadUrl"], "https://cdn.example/a.mkv");
        assert_eq!(json["episode"], 3);
        assert!(json.get("watchUrl").is_none());
    }
}
