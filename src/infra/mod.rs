pub mod aviationstack;
