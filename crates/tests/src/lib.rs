#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod analyze_tests;
#[cfg(test)]
mod competitor_tests;
#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod stats_tests;
#[cfg(test)]
mod trending_tests;
