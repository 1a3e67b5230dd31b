use console::Style;
use passfoto_core::profile::SizeProfile;
use passfoto_core::raster::OutputSheet;
use passfoto_core::render::sheet::margins;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
        }
    }
}

pub fn print_sheet_summary(profile: &SizeProfile, sheet: &OutputSheet) {
    let s = Styles::new();
    let (margin_x, margin_y) = margins(profile);

    println!();
    println!("  {}", s.title.apply_to("Print Sheet"));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Profile"),
        s.value.apply_to(&profile.id)
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Paper"),
        s.value
            .apply_to(format!("{}x{} px", sheet.width(), sheet.height()))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(format!(
            "{} cols x {} rows ({} copies)",
            profile.cols,
            profile.rows,
            sheet.placements.len()
        ))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Margins"),
        s.value
            .apply_to(format!("{margin_x:.1} x {margin_y:.1} px"))
    );
    println!();
}
