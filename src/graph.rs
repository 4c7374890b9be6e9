use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ColorType, ImageEncoder, codecs::png::PngEncoder};
use plotters::prelude::*;

use crate::{Res, stats::MonthlyLikes};

const WIDTH: u32 = 960;
const HEIGHT: u32 = 540;

/// Renders one cumulative line per top genre across the ordered months and
/// returns the chart as a `data:image/png;base64,...` URI ready for an
/// `<img>` tag. An empty table produces an empty grid.
pub fn render_data_uri(monthly: &MonthlyLikes, genres: &[String]) -> Res<String> {
    let months: Vec<String> = monthly.keys().cloned().collect();
    let max_likes = monthly
        .values()
        .flat_map(|counts| counts.values())
        .copied()
        .max()
        .unwrap_or(0);

    let mut rgb = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| e.to_string())?;

        let x_max = months.len().saturating_sub(1).max(1);
        let mut chart = ChartBuilder::on(&root)
            .caption("Top Genre Like History", ("sans-serif", 28))
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(56)
            .build_cartesian_2d(0..x_max, 0..max_likes + 1)
            .map_err(|e| e.to_string())?;

        chart
            .configure_mesh()
            .x_labels(months.len().min(8))
            .x_label_formatter(&|idx| months.get(*idx).cloned().unwrap_or_default())
            .x_desc("Months")
            .y_desc("Total Songs Liked Per Genre")
            .draw()
            .map_err(|e| e.to_string())?;

        for (idx, genre) in genres.iter().enumerate() {
            let style = Palette99::pick(idx).to_rgba().stroke_width(2);
            let points = months.iter().enumerate().map(|(i, month)| {
                let count = monthly
                    .get(month)
                    .and_then(|counts| counts.get(genre))
                    .copied()
                    .unwrap_or(0);
                (i, count)
            });

            chart
                .draw_series(LineSeries::new(points, style))
                .map_err(|e| e.to_string())?
                .label(genre)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], style));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| e.to_string())?;

        root.present().map_err(|e| e.to_string())?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(&rgb, WIDTH, HEIGHT, ColorType::Rgb8)
        .map_err(|e| e.to_string())?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}
