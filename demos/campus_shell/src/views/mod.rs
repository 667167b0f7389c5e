//! Views of the campus shell, one file per component.
//!
//! Every view is a unit struct implementing [`wayfinder::View`] with seeded
//! demo content. The component names (`HomeView`, `AboutView`, ...) are the
//! identifiers the route table binds to and the test suite asserts on.

pub mod about_view;
pub mod calculator_view;
pub mod home_view;
pub mod item_list;
pub mod new_page;
pub mod product_view;
pub mod shopping_cart_view;
pub mod simple_todo_view;
pub mod student_list_view;
pub mod student_manage_view;
pub mod test_view;
pub mod todo_list;
pub mod todo_list_view;

pub use about_view::AboutView;
pub use calculator_view::CalculatorView;
pub use home_view::HomeView;
pub use item_list::ItemList;
pub use new_page::NewPage;
pub use product_view::ProductView;
pub use shopping_cart_view::ShoppingCartView;
pub use simple_todo_view::SimpleTodoView;
pub use student_list_view::StudentListView;
pub use student_manage_view::StudentManageView;
pub use test_view::TestView;
pub use todo_list::TodoList;
pub use todo_list_view::TodoListView;
