mod department;
mod employee;
mod identity_map;
mod lookup;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use identity_map::IdentityMap;
pub use lookup::DepartmentLookup;
