//! Server-rendered game detail page.

use gamevault_core::html::escape;
use gamevault_core::image::data_uri;
use gamevault_db::models::game::Game;

const STYLE: &str = "\
    body { font-family: Arial, sans-serif; margin: 0; padding: 0; background-color: #f4f4f4; }
    h2 { text-align: center; margin-top: 20px; color: #333; }
    .gameDetails { max-width: 600px; margin: 20px auto; background-color: #fff; \
border-radius: 5px; box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1); padding: 20px; }
    .gameImage { max-width: 100%; height: auto; border-radius: 5px; margin-bottom: 10px; }";

/// Render the detail page for one game.
///
/// Every interpolated value is HTML-escaped. The `<img>` tag is only emitted
/// when the record has an image.
pub fn game_detail_page(game: &Game) -> String {
    let title = escape(&game.title);
    let content = escape(&game.content);
    let link = escape(&game.download_link);

    let image = game
        .image
        .as_ref()
        .map(|image| {
            format!(
                r#"<img src="{src}" class="gameImage" alt="{title}">"#,
                src = escape(&data_uri(&image.content_type, &image.data)),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
{STYLE}
  </style>
</head>
<body>
  <h2>{title}</h2>
  <div class="gameDetails">
    <p>{content}</p>
    {image}
    <p>Download Link: <a href="{link}" target="_blank" rel="noopener noreferrer">{link}</a></p>
  </div>
</body>
</html>
"#
    )
}
