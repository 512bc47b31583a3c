use std::path::Path;

use console::Style;
use focusfuse_core::pipeline::config::FocusStackConfig;
use focusfuse_core::pipeline::FocusStackOutput;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_config_summary(config: &FocusStackConfig, frames: usize, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Focus Stack"));
    println!();
    println!("  {:<18}{}", s.label.apply_to("Frames"), s.value.apply_to(frames));
    println!(
        "  {:<18}{}",
        s.label.apply_to("Stack"),
        s.value.apply_to(config.number_to_stack)
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Kernel size"),
        s.value.apply_to(config.kernel_size)
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Min pyramid size"),
        s.value.apply_to(config.min_pyramid_size)
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();
}

pub fn print_stack_summary<S>(output: &FocusStackOutput<S>) {
    let s = Styles::new();
    let range = output.window.indices(output.scores.len());

    println!();
    println!(
        "  {:<18}{} ({})",
        s.label.apply_to("Sharpest frame"),
        s.value.apply_to(output.window.best),
        output.window.placement
    );
    println!(
        "  {:<18}{}..{}",
        s.label.apply_to("Stacked frames"),
        s.value.apply_to(range.start),
        s.value.apply_to(range.end)
    );
    println!(
        "  {:<18}{}",
        s.label.apply_to("Pyramid depth"),
        s.value.apply_to(output.pyramid_depth)
    );
    for frame in &output.stacked {
        println!(
            "    {:>5}  {:>14.2}",
            frame.index(),
            frame.score
        );
    }
}
