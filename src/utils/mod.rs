use url::Url;

pub fn render_output_name(template: &str, id: &str) -> String {
    template.replace("%(id)s", id)
}

/// Best-effort video id lookup for YouTube style links.
pub fn media_id_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if host == "youtu.be" {
        return parsed
            .path_segments()?
            .next()
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string());
    }

    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// File name yt-dlp is expected to write for `url`, if the id can be read from it.
pub fn expected_output_name(template: &str, url: &str) -> Option<String> {
    media_id_from_url(url).map(|id| render_output_name(template, &id))
}
