//! Prints the copyright line and the converted extent for a small set of sources.
//! Run with: RUST_LOG=trace cargo run --example copyright_line

use std::collections::BTreeMap;

use carta::attribution::{
    collect_copyrights, render_copyrights, SourceCacheEntry, SourceInfo, DEFAULT_SEPARATOR,
};
use carta::carta_types::LngLatBounds;
use carta::element::copyright_element;
use carta::layer::{layer_copyrights, Layer};
use carta::projection::to_web_mercator;
use carta::url::parse_url_params;

fn main() -> Result<(), carta::CartaError> {
    env_logger::init();

    let mut caches = BTreeMap::new();
    caches.insert(
        "openmaptiles",
        SourceCacheEntry::new(
            true,
            SourceInfo::with_attribution(
                r#"<a href="https://www.openstreetmap.org/about/" target="_blank">© OpenStreetMap contributors</a>"#,
            ),
        ),
    );
    caches.insert(
        "realtime",
        SourceCacheEntry::new(true, SourceInfo::with_attribution("© geOps Realtime")),
    );

    let layers = vec![Layer::new("basemap")
        .with_copyright("© swisstopo")
        .with_child(Layer::new("stations").with_copyright("© SBB"))];

    let mut copyrights = collect_copyrights(&caches);
    copyrights.extend(layer_copyrights(&layers));

    let element =
        copyright_element().with_inner_html(render_copyrights(&copyrights, DEFAULT_SEPARATOR));
    println!(
        "<{} style=\"{}\">{}</{0}>",
        element.tag(),
        element.css_text(),
        element.inner_html().unwrap_or_default()
    );

    let params = parse_url_params(
        "https://map.example.com/?x=7.44&y=46.95&z=12&layers=basemap%2Crealtime",
    )?;
    for (key, value) in params.iter() {
        println!("{key} = {value}");
    }

    let extent = to_web_mercator(&LngLatBounds::new(5.9559, 45.818, 10.4921, 47.8084))?;
    println!("extent: {:?}", extent.to_array());

    Ok(())
}
