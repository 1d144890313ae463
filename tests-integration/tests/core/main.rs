mod ics02_client;
