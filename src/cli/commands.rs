use std::path::Path;

use crate::app::logger::truncate;
use crate::app::{AppContext, Result};
use crate::domain::Icon;

/// Prepend `https://` unless the input already names a scheme.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}

pub async fn list_icons(ctx: &AppContext, url: &str) -> Result<()> {
    let links = ctx.page_icon.list(url).await?;
    print!("{}", format_listing(&links));
    Ok(())
}

pub async fn best_icon(
    ctx: &AppContext,
    url: &str,
    preference: &[String],
    output: Option<&Path>,
) -> Result<()> {
    let icon = match ctx.page_icon.infer(url, preference).await {
        Ok(icon) => icon,
        Err(e) if e.is_empty_result() => {
            println!("no icons found");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("{}", describe_icon(&icon));

    if let Some(path) = output {
        icon.write_to(path)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

/// Zero-indexed link listing followed by a blank line.
pub fn format_listing(links: &[String]) -> String {
    if links.is_empty() {
        return "no icons found\n".to_string();
    }
    let mut out = String::new();
    for (i, link) in links.iter().enumerate() {
        out.push_str(&format!("{}: {}\n", i, link));
    }
    out.push('\n');
    out
}

fn describe_icon(icon: &Icon) -> String {
    format!(
        "{}\n  {} (.{}), {} bytes",
        truncate(icon.source()),
        icon.mime(),
        icon.ext(),
        icon.size()
    )
}
