pub mod gradient_view;
