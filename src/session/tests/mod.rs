#[cfg(test)]
mod render_test;
