// wire types for the site's outbound calls
//
// the site has no backend of its own, so the only messages here are the ones sent
// to the email relay from the contact form
pub mod relay;
