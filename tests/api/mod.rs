mod category_tests;
mod health_tests;
mod inventory_tests;
mod locality_tests;
mod not_found_tests;
mod product_tests;
mod store_tests;
