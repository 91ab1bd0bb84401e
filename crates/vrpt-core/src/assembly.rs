use tracing::warn;

use vrpt_model::{Category, DataContainer};

/// Collect built categories, in order, into one named container.
///
/// A category whose canonical name is already taken keeps its rows but is
/// renamed to `<name>_<n>`, counting from 2.
pub fn assemble_container(name: &str, categories: Vec<Category>) -> DataContainer {
    let mut container = DataContainer::new(name);
    for mut category in categories {
        if container.contains(&category.name) {
            let unique = disambiguate(&container, &category.name);
            warn!(
                category = %category.name,
                source = %category.source_name,
                renamed = %unique,
                "duplicate canonical category name"
            );
            category.set_name(unique);
        }
        container.push(category);
    }
    container
}

fn disambiguate(container: &DataContainer, name: &str) -> String {
    let mut suffix = 2;
    loop {
        let candidate = format!("{name}_{suffix}");
        if !container.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
