use crate::model::Module;

/// Summary text the generator writes when it only produced video queries.
const VIDEO_PLACEHOLDER: &str = "Video resources available";
const YOUTUBE_RESULTS: &str = "https://www.youtube.com/results";

/// Which resource block a module shows. Precedence: video > docs > text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePanel<'a> {
    Video {
        queries: &'a [String],
        footnote: Option<&'a str>,
    },
    Docs {
        links: &'a [String],
    },
    Text {
        summary: &'a str,
    },
}

pub fn resource_panel(module: &Module) -> Option<ResourcePanel<'_>> {
    let resources = &module.resource_data;

    if !resources.video_queries.is_empty() {
        let footnote = module
            .summary_text()
            .filter(|s| !s.contains(VIDEO_PLACEHOLDER));
        return Some(ResourcePanel::Video {
            queries: &resources.video_queries,
            footnote,
        });
    }

    if !resources.ref_links.is_empty() {
        return Some(ResourcePanel::Docs {
            links: &resources.ref_links,
        });
    }

    module
        .summary_text()
        .map(|summary| ResourcePanel::Text { summary })
}

pub fn youtube_search_url(query: &str) -> String {
    match url::Url::parse_with_params(YOUTUBE_RESULTS, &[("search_query", query)]) {
        Ok(url) => url.into(),
        Err(err) => {
            log::warn!("Could not build search URL for {query:?}: {err}");
            YOUTUBE_RESULTS.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceData;

    fn module(videos: &[&str], links: &[&str], summary: Option<&str>) -> Module {
        Module {
            id: 1,
            title: "Closures".into(),
            summary: summary.map(str::to_string),
            resource_data: ResourceData {
                video_queries: videos.iter().map(|s| s.to_string()).collect(),
                ref_links: links.iter().map(|s| s.to_string()).collect(),
            },
            sub_modules: vec![],
            questions: vec![],
        }
    }

    #[test]
    fn videos_win_over_links_and_summary() {
        let m = module(
            &["rust closures explained"],
            &["https://doc.rust-lang.org/book/ch13-01-closures.html"],
            Some("Closures capture their environment."),
        );
        match resource_panel(&m) {
            Some(ResourcePanel::Video { queries, footnote }) => {
                assert_eq!(queries, ["rust closures explained"]);
                assert_eq!(footnote, Some("Closures capture their environment."));
            }
            other => panic!("expected video mode, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_summary_is_not_a_footnote() {
        let m = module(&["q"], &[], Some("Video resources available below."));
        assert_eq!(
            resource_panel(&m),
            Some(ResourcePanel::Video {
                queries: &["q".to_string()],
                footnote: None
            })
        );
    }

    #[test]
    fn links_without_videos_are_docs_mode() {
        let m = module(&[], &["https://docs.python.org/3/"], Some("ignored"));
        assert_eq!(
            resource_panel(&m),
            Some(ResourcePanel::Docs {
                links: &["https://docs.python.org/3/".to_string()]
            })
        );
    }

    #[test]
    fn summary_alone_is_text_mode() {
        let m = module(&[], &[], Some("Two sentences."));
        assert_eq!(
            resource_panel(&m),
            Some(ResourcePanel::Text {
                summary: "Two sentences."
            })
        );
    }

    #[test]
    fn nothing_to_show() {
        assert_eq!(resource_panel(&module(&[], &[], None)), None);
        assert_eq!(resource_panel(&module(&[], &[], Some(""))), None);
    }

    #[test]
    fn whitespace_summary_still_counts_as_text() {
        let m = module(&[], &[], Some("  "));
        assert_eq!(resource_panel(&m), Some(ResourcePanel::Text { summary: "  " }));
    }

    #[test]
    fn search_url_encodes_query() {
        let url = youtube_search_url("C++ move semantics");
        assert!(url.starts_with("https://www.youtube.com/results?search_query="));
        assert!(url.contains("C%2B%2B"));
        assert!(!url.contains(' '));
    }
}
