pub mod gallery;
pub mod health;

#[cfg(test)]
mod test;
