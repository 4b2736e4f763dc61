// Library exports for yarnlock-inspect
pub mod config;
pub mod lockfile;
pub mod output;
pub mod yarn;
