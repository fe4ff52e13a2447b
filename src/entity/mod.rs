pub mod categories;
pub mod customers;
pub mod order_items;
pub mod order_summary;
pub mod orders;
pub mod product_availability;
pub mod products;

pub use categories::Entity as Categories;
pub use customers::Entity as Customers;
pub use order_items::Entity as OrderItems;
pub use order_summary::Entity as OrderSummary;
pub use orders::Entity as Orders;
pub use product_availability::Entity as ProductAvailability;
pub use products::Entity as Products;
